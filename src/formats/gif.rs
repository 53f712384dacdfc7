//! GIF format handler
//!
//! Both GIF87a and GIF89a share the "GIF8" prefix, and the logical screen
//! descriptor follows the 6-byte signature immediately: width and height
//! as little-endian 16-bit values at offsets 6 and 8.

use crate::format::Format;
use crate::formats::read_u16_le;
use crate::handler::FormatHandler;
use crate::info::Dimensions;

/// Shared prefix of the GIF87a/GIF89a signatures
const GIF_SIGNATURE: &[u8] = b"GIF8";

/// Offset of the logical screen width
const SCREEN_WIDTH_OFFSET: usize = 6;

/// Offset of the logical screen height
const SCREEN_HEIGHT_OFFSET: usize = 8;

/// GIF format handler
#[derive(Debug, Clone, Copy, Default)]
pub struct GifHandler;

impl FormatHandler for GifHandler {
    fn can_handle(&self, data: &[u8]) -> bool {
        data.get(..GIF_SIGNATURE.len()) == Some(GIF_SIGNATURE)
    }

    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        let width = read_u16_le(data, SCREEN_WIDTH_OFFSET)?;
        let height = read_u16_le(data, SCREEN_HEIGHT_OFFSET)?;
        Some(Dimensions::new(width as u32, height as u32))
    }

    fn format(&self) -> Format {
        Format::Gif
    }
}
