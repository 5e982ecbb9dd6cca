pub mod byte_cursor;
pub mod error;

pub use error::JpegDumpError;
pub use jpeg_marker_code::JpegMarkerCode;
pub use jpeg_stream_tracer::{JpegStreamTracer, dump};
pub use trace_sink::{StdoutSink, TraceBuffer, TraceLine, TraceSink};

/// Interleave mode (ILV) carried by a JPEG-LS scan header. Values outside
/// the standard table map to `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterleaveMode {
    None = 0,
    Line = 1,
    Sample = 2,
    Invalid,
}

impl From<u8> for InterleaveMode {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::None,
            1 => Self::Line,
            2 => Self::Sample,
            _ => Self::Invalid,
        }
    }
}

impl InterleaveMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Line => "Line interleaved",
            Self::Sample => "Sample interleaved",
            Self::Invalid => "Invalid",
        }
    }
}

pub mod jpeg_marker_code;
pub mod jpeg_stream_tracer;
pub mod trace_sink;

#[cfg(test)]
mod tests {
    use super::InterleaveMode;

    #[test]
    fn interleave_mode_names_follow_the_ilv_table() {
        assert_eq!(InterleaveMode::from(0).name(), "None");
        assert_eq!(InterleaveMode::from(1).name(), "Line interleaved");
        assert_eq!(InterleaveMode::from(2).name(), "Sample interleaved");
        assert_eq!(InterleaveMode::from(3).name(), "Invalid");
        assert_eq!(InterleaveMode::from(255).name(), "Invalid");
    }
}
