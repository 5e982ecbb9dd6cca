use crate::error::JpegDumpError;
use std::io::Read;

/// Forward-only cursor over a byte source that tracks the absolute offset
/// of the next byte to read.
pub struct ByteCursor<R> {
    source: R,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads the next byte, or returns `Ok(None)` once the source is exhausted.
    pub fn try_read_u8(&mut self) -> Result<Option<u8>, JpegDumpError> {
        let mut buffer = [0u8; 1];
        if self.source.read(&mut buffer)? == 0 {
            return Ok(None);
        }
        self.position += 1;
        Ok(Some(buffer[0]))
    }

    /// Reads the next byte; exhaustion here means a truncated marker segment.
    pub fn read_u8(&mut self) -> Result<u8, JpegDumpError> {
        self.try_read_u8()?.ok_or(JpegDumpError::UnexpectedEndOfStream {
            offset: self.position,
        })
    }

    pub fn read_u16(&mut self) -> Result<u16, JpegDumpError> {
        let b1 = self.read_u8()? as u16;
        let b2 = self.read_u8()? as u16;
        Ok((b1 << 8) | b2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "source gone"))
        }
    }

    #[test]
    fn reads_advance_position() {
        let mut cursor = ByteCursor::new(&[0x12u8, 0x34, 0x56][..]);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_u8().unwrap(), 0x12);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x3456);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn read_u16_is_big_endian() {
        let mut cursor = ByteCursor::new(&[0x01u8, 0x02][..]);
        assert_eq!(cursor.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn exhaustion_is_clean_for_try_read_u8() {
        let mut cursor = ByteCursor::new(&[0xFFu8][..]);
        assert_eq!(cursor.try_read_u8().unwrap(), Some(0xFF));
        assert_eq!(cursor.try_read_u8().unwrap(), None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn exhaustion_is_an_error_for_read_u8() {
        let mut cursor = ByteCursor::new(&[0x08u8][..]);
        cursor.read_u8().unwrap();
        match cursor.read_u8() {
            Err(JpegDumpError::UnexpectedEndOfStream { offset }) => assert_eq!(offset, 1),
            other => panic!("expected end of stream error, got {other:?}"),
        }
    }

    #[test]
    fn io_failure_maps_to_stream_read() {
        let mut cursor = ByteCursor::new(FailingSource);
        assert!(matches!(
            cursor.try_read_u8(),
            Err(JpegDumpError::StreamRead(_))
        ));
    }
}
