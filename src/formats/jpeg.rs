//! JPEG format handler
//!
//! JPEG stores dimensions in a Start-Of-Frame segment, so the handler walks
//! the marker sequence from the start of the stream:
//! - Each segment is `FF <marker> <u16 length> <payload>`
//! - SOF markers occupy 0xC0-0xCF, excluding 0xC4 (DHT), 0xC8 (JPG
//!   reserved), and 0xCC (DAC)
//! - The SOF payload is `<precision> <u16 height> <u16 width> ...`
//!
//! Stray non-0xFF fill bytes between segments are tolerated by advancing
//! one byte at a time until the next marker prefix.

use crate::format::Format;
use crate::formats::{read_u16_be, read_u8};
use crate::handler::FormatHandler;
use crate::info::Dimensions;

/// JPEG magic bytes: SOI marker plus the prefix of the first segment marker
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Marker prefix byte
const MARKER_PREFIX: u8 = 0xFF;

/// Markers in the SOF range that do not carry frame dimensions
const MARKER_DHT: u8 = 0xC4;
const MARKER_JPG: u8 = 0xC8;
const MARKER_DAC: u8 = 0xCC;

/// JPEG format handler
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegHandler;

impl FormatHandler for JpegHandler {
    fn can_handle(&self, data: &[u8]) -> bool {
        data.get(..JPEG_SIGNATURE.len()) == Some(JPEG_SIGNATURE)
    }

    /// Scan marker segments for a Start-Of-Frame and read its dimensions
    ///
    /// Returns `None` when the scan exhausts the buffer without finding an
    /// SOF marker (e.g. a stream truncated before the frame header).
    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        let mut offset = 2usize;
        loop {
            if read_u8(data, offset)? != MARKER_PREFIX {
                // Stray fill byte; resynchronize on the next 0xFF.
                offset += 1;
                continue;
            }

            let marker = read_u8(data, offset + 1)?;
            if is_sof_marker(marker) {
                let height = read_u16_be(data, offset + 5)?;
                let width = read_u16_be(data, offset + 7)?;
                return Some(Dimensions::new(width as u32, height as u32));
            }

            // Not a frame header: skip marker, length field, and payload.
            let length = read_u16_be(data, offset + 2)? as usize;
            offset = offset.checked_add(2 + length)?;
        }
    }

    fn format(&self) -> Format {
        Format::Jpeg
    }
}

/// Whether a marker is a Start-Of-Frame variant carrying dimensions
fn is_sof_marker(marker: u8) -> bool {
    (0xC0..=0xCF).contains(&marker)
        && marker != MARKER_DHT
        && marker != MARKER_JPG
        && marker != MARKER_DAC
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SOI + APP0 (JFIF) + SOF0 carrying the given dimensions
    fn build_jpeg(width: u16, height: u16) -> Vec<u8> {
        let mut jpeg = vec![0xFF, 0xD8];
        // APP0, declared length 16 (length field + 14 payload bytes)
        jpeg.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
        jpeg.extend_from_slice(b"JFIF\0");
        jpeg.resize(2 + 2 + 16, 0x00);
        // SOF0: precision, height, width, components
        jpeg.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
        jpeg.extend_from_slice(&height.to_be_bytes());
        jpeg.extend_from_slice(&width.to_be_bytes());
        jpeg.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
        jpeg
    }

    #[test]
    fn test_can_handle() {
        let handler = JpegHandler;
        assert!(handler.can_handle(&build_jpeg(1, 1)));
        assert!(!handler.can_handle(&[0xFF, 0xD8, 0x00]));
        assert!(!handler.can_handle(&[0xFF, 0xD8]));
        assert!(!handler.can_handle(&[]));
    }

    #[test]
    fn test_read_dimensions() {
        let handler = JpegHandler;
        let jpeg = build_jpeg(800, 600);
        assert_eq!(
            handler.read_dimensions(&jpeg),
            Some(Dimensions::new(800, 600))
        );
    }

    #[test]
    fn test_no_sof_marker() {
        let handler = JpegHandler;
        // SOI + APP0 only; the scan runs off the end.
        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        jpeg.resize(2 + 2 + 16, 0x00);
        assert_eq!(handler.read_dimensions(&jpeg), None);
    }

    #[test]
    fn test_stray_fill_bytes_before_marker() {
        let mut jpeg = vec![0xFF, 0xD8];
        // Fill bytes the scan must step over one at a time.
        jpeg.extend_from_slice(&[0x00, 0x00, 0x00]);
        jpeg.extend_from_slice(&[0xFF, 0xC2, 0x00, 0x11, 0x08]);
        jpeg.extend_from_slice(&120u16.to_be_bytes());
        jpeg.extend_from_slice(&160u16.to_be_bytes());
        let handler = JpegHandler;
        assert_eq!(
            handler.read_dimensions(&jpeg),
            Some(Dimensions::new(160, 120))
        );
    }

    #[test]
    fn test_dht_not_treated_as_sof() {
        let mut jpeg = vec![0xFF, 0xD8];
        // DHT segment sized to cover would-be dimension bytes
        jpeg.extend_from_slice(&[0xFF, 0xC4, 0x00, 0x08]);
        jpeg.extend_from_slice(&[0xAA; 6]);
        // Real SOF0 follows
        jpeg.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
        jpeg.extend_from_slice(&600u16.to_be_bytes());
        jpeg.extend_from_slice(&800u16.to_be_bytes());
        let handler = JpegHandler;
        assert_eq!(
            handler.read_dimensions(&jpeg),
            Some(Dimensions::new(800, 600))
        );
    }

    #[test]
    fn test_truncated_sof_payload() {
        let handler = JpegHandler;
        // SOF marker present but the buffer ends before the width field.
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x02];
        assert_eq!(handler.read_dimensions(&jpeg), None);
    }
}
