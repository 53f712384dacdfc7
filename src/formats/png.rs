//! PNG format handler
//!
//! PNG's IHDR chunk is required to be the first chunk, so the dimensions
//! sit at a fixed offset: 8-byte signature, 4-byte chunk length, 4-byte
//! chunk type, then width and height as big-endian 32-bit values.

use crate::format::Format;
use crate::formats::read_u32_be;
use crate::handler::FormatHandler;
use crate::info::Dimensions;

/// Leading bytes of the PNG signature
const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

/// Offset of the IHDR width field
const IHDR_WIDTH_OFFSET: usize = 16;

/// Offset of the IHDR height field
const IHDR_HEIGHT_OFFSET: usize = 20;

/// PNG format handler
#[derive(Debug, Clone, Copy, Default)]
pub struct PngHandler;

impl FormatHandler for PngHandler {
    fn can_handle(&self, data: &[u8]) -> bool {
        data.get(..PNG_SIGNATURE.len()) == Some(PNG_SIGNATURE)
    }

    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        let width = read_u32_be(data, IHDR_WIDTH_OFFSET)?;
        let height = read_u32_be(data, IHDR_HEIGHT_OFFSET)?;
        Some(Dimensions::new(width, height))
    }

    fn format(&self) -> Format {
        Format::Png
    }
}
