use thiserror::Error;

#[derive(Error, Debug)]
pub enum JpegDumpError {
    #[error("Stream read error: {0}")]
    StreamRead(#[from] std::io::Error),

    #[error("Unexpected end of stream at offset {offset}")]
    UnexpectedEndOfStream { offset: u64 },
}
