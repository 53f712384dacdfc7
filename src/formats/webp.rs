//! WebP format handler
//!
//! WebP uses the RIFF container with form type "WEBP". The first chunk tag
//! at offset 12 decides which header layout carries the dimensions:
//! - `VP8X` (extended): canvas width/height stored minus one as 24-bit
//!   little-endian fields
//! - `VP8L` (lossless): two packed 14-bit fields in the bitstream header,
//!   also stored minus one
//! - `VP8 ` (lossy, trailing space): 14-bit width/height inside the frame
//!   tag, masked from little-endian 16-bit reads
//!
//! Reference: RFC 9649 - WebP Image Format

use crate::format::Format;
use crate::formats::{read_tag4, read_u16_le, read_u24_le, read_u8};
use crate::handler::FormatHandler;
use crate::info::Dimensions;

/// RIFF container magic
const RIFF_SIGNATURE: &[u8] = b"RIFF";

/// WebP form type at offset 8
const WEBP_SIGNATURE: &[u8] = b"WEBP";

/// VP8X chunk FourCC (extended format)
const VP8X_CHUNK_ID: &[u8] = b"VP8X";

/// VP8L chunk FourCC (lossless format)
const VP8L_CHUNK_ID: &[u8] = b"VP8L";

/// VP8 chunk FourCC (lossy format, note the trailing space)
const VP8_CHUNK_ID: &[u8] = b"VP8 ";

/// Offset of the first chunk's FourCC
const FIRST_CHUNK_OFFSET: usize = 12;

/// WebP format handler
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpHandler;

impl FormatHandler for WebpHandler {
    fn can_handle(&self, data: &[u8]) -> bool {
        data.get(..4) == Some(RIFF_SIGNATURE) && data.get(8..12) == Some(WEBP_SIGNATURE)
    }

    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        match read_tag4(data, FIRST_CHUNK_OFFSET)? {
            tag if tag == VP8X_CHUNK_ID => {
                let width = read_u24_le(data, 24)? + 1;
                let height = read_u24_le(data, 27)? + 1;
                Some(Dimensions::new(width, height))
            }
            tag if tag == VP8L_CHUNK_ID => {
                // 14-bit packed fields after the 0x2F signature byte.
                let b0 = read_u8(data, 21)? as u32;
                let b1 = read_u8(data, 22)? as u32;
                let b2 = read_u8(data, 23)? as u32;
                let b3 = read_u8(data, 24)? as u32;
                let width = ((b0 | (b1 << 8)) & 0x3FFF) + 1;
                let height = (((b1 >> 6) | (b2 << 2) | (b3 << 10)) & 0x3FFF) + 1;
                Some(Dimensions::new(width, height))
            }
            tag if tag == VP8_CHUNK_ID => {
                let width = (read_u16_le(data, 26)? & 0x3FFF) as u32;
                let height = (read_u16_le(data, 28)? & 0x3FFF) as u32;
                Some(Dimensions::new(width, height))
            }
            _ => None,
        }
    }

    fn format(&self) -> Format {
        Format::Webp
    }
}
