use crate::InterleaveMode;
use crate::byte_cursor::ByteCursor;
use crate::error::JpegDumpError;
use crate::jpeg_marker_code::{JPEG_MARKER_START_BYTE, JpegMarkerCode};
use crate::trace_sink::TraceSink;
use std::io::Read;

/// Scans `source` from start to finish and emits one trace line per marker
/// segment field to `sink`.
///
/// Returns normally when the source is exhausted. Fails when the source
/// reports an I/O error or runs dry inside a marker segment; lines emitted
/// before the failure stay with the sink.
pub fn dump<R: Read, S: TraceSink>(source: R, sink: &mut S) -> Result<(), JpegDumpError> {
    JpegStreamTracer::new(source, sink).dump()
}

/// Marker-level tracer for JPEG and JPEG-LS codestreams.
pub struct JpegStreamTracer<'a, R, S> {
    cursor: ByteCursor<R>,
    sink: &'a mut S,
    jpegls_stream: bool,
}

impl<'a, R: Read, S: TraceSink> JpegStreamTracer<'a, R, S> {
    pub fn new(source: R, sink: &'a mut S) -> Self {
        Self {
            cursor: ByteCursor::new(source),
            sink,
            jpegls_stream: false,
        }
    }

    pub fn dump(&mut self) -> Result<(), JpegDumpError> {
        while let Some(byte) = self.cursor.try_read_u8()? {
            if byte != JPEG_MARKER_START_BYTE {
                continue;
            }
            let marker_code = match self.cursor.try_read_u8()? {
                Some(marker_code) => marker_code,
                None => break,
            };
            if self.is_marker_code(marker_code) {
                self.dump_marker_code(marker_code)?;
            }
        }
        Ok(())
    }

    // Within entropy-coded JPEG-LS data a 0xFF is always followed by a byte
    // with the high bit clear (bit stuffing); in the header section any
    // non-zero byte after 0xFF is a marker code.
    fn is_marker_code(&self, marker_code: u8) -> bool {
        if self.jpegls_stream {
            (marker_code & 0x80) == 0x80
        } else {
            marker_code > 0
        }
    }

    fn dump_marker_code(&mut self, marker_code: u8) -> Result<(), JpegDumpError> {
        let start_offset = self.start_offset();
        match JpegMarkerCode::try_from(marker_code) {
            Ok(JpegMarkerCode::StartOfImage) => self.dump_start_of_image(start_offset),
            Ok(JpegMarkerCode::EndOfImage) => self.dump_end_of_image(start_offset),
            Ok(JpegMarkerCode::StartOfFrameJpegls) => self.dump_start_of_frame_jpegls(start_offset),
            Ok(JpegMarkerCode::StartOfScan) => self.dump_start_of_scan(start_offset),
            _ => self.dump_unknown_marker(marker_code, start_offset),
        }
    }

    // Offset of the 0xFF escape byte that announced the current marker.
    fn start_offset(&self) -> u64 {
        self.cursor.position() - 2
    }

    fn dump_start_of_image(&mut self, start_offset: u64) -> Result<(), JpegDumpError> {
        self.sink.emit(
            start_offset,
            "Marker 0xFFD8: SOI (Start Of Image), defined in ITU T.81/IEC 10918-1",
        );
        Ok(())
    }

    fn dump_end_of_image(&mut self, start_offset: u64) -> Result<(), JpegDumpError> {
        self.sink.emit(
            start_offset,
            "Marker 0xFFD9: EOI (End Of Image), defined in ITU T.81/IEC 10918-1",
        );
        Ok(())
    }

    fn dump_start_of_frame_jpegls(&mut self, start_offset: u64) -> Result<(), JpegDumpError> {
        let size = self.cursor.read_u16()?;
        self.sink.emit(start_offset, &format!(" Size = {}", size));

        let offset = self.cursor.position();
        let sample_precision = self.cursor.read_u8()?;
        self.sink.emit(offset, &format!(" Sample precision (P) = {}", sample_precision));

        let offset = self.cursor.position();
        let line_count = self.cursor.read_u16()?;
        self.sink.emit(offset, &format!(" Number of lines (Y) = {}", line_count));

        let offset = self.cursor.position();
        let samples_per_line = self.cursor.read_u16()?;
        self.sink.emit(offset, &format!(" Number of samples per line (X) = {}", samples_per_line));

        let offset = self.cursor.position();
        let component_count = self.cursor.read_u8()?;
        self.sink.emit(offset, &format!(" Number of image components (Nf) = {}", component_count));

        for _ in 0..component_count {
            let offset = self.cursor.position();
            let component_id = self.cursor.read_u8()?;
            self.sink.emit(offset, &format!("  Component identifier (Ci) = {}", component_id));

            let offset = self.cursor.position();
            let sampling_factor = self.cursor.read_u8()?;
            self.sink.emit(
                offset,
                &format!(
                    "  H and V sampling factor (Hi + Vi) = {} ({} + {})",
                    sampling_factor,
                    sampling_factor >> 4,
                    sampling_factor & 0x0F
                ),
            );

            let offset = self.cursor.position();
            let quantization_table = self.cursor.read_u8()?;
            self.sink.emit(
                offset,
                &format!(
                    "  Quantization table (Tqi) [reserved, should be 0] = {}",
                    quantization_table
                ),
            );
        }

        // Entropy-coded data follows the frame header, where only bytes with
        // the high bit set announce a marker.
        log::debug!(
            "frame header at offset {} decoded, switching to JPEG-LS marker detection",
            start_offset
        );
        self.jpegls_stream = true;
        Ok(())
    }

    fn dump_start_of_scan(&mut self, start_offset: u64) -> Result<(), JpegDumpError> {
        let size = self.cursor.read_u16()?;
        self.sink.emit(start_offset, &format!(" Size = {}", size));

        let offset = self.cursor.position();
        let component_count = self.cursor.read_u8()?;
        self.sink.emit(offset, &format!(" Component count (Ns) = {}", component_count));

        for _ in 0..component_count {
            let offset = self.cursor.position();
            let component_id = self.cursor.read_u8()?;
            self.sink.emit(offset, &format!("  Component identifier (Ci) = {}", component_id));

            let offset = self.cursor.position();
            let mapping_table = self.cursor.read_u8()?;
            self.sink.emit(offset, &format!("  Mapping table selector (Tmi) = {}", mapping_table));
        }

        let offset = self.cursor.position();
        let near_lossless = self.cursor.read_u8()?;
        self.sink.emit(offset, &format!(" Near lossless (NEAR parameter) = {}", near_lossless));

        let offset = self.cursor.position();
        let interleave_mode = self.cursor.read_u8()?;
        let mode = InterleaveMode::from(interleave_mode);
        if mode == InterleaveMode::Invalid {
            log::warn!(
                "interleave mode {} at offset {} is out of range",
                interleave_mode,
                offset
            );
        }
        self.sink.emit(
            offset,
            &format!(
                " Interleave mode (ILV parameter) = {} ({})",
                interleave_mode,
                mode.name()
            ),
        );

        let offset = self.cursor.position();
        let point_transform = self.cursor.read_u8()?;
        self.sink.emit(offset, &format!(" Point transform = {}", point_transform));
        Ok(())
    }

    fn dump_unknown_marker(
        &mut self,
        marker_code: u8,
        start_offset: u64,
    ) -> Result<(), JpegDumpError> {
        self.sink.emit(start_offset, &format!("Marker 0xFF{:02X}", marker_code));
        Ok(())
    }
}
