//! AVIF format handler
//!
//! AVIF is an ISO Base Media File Format (BMFF) container:
//! - Files are composed of "boxes", each with a 4-byte big-endian size and
//!   a 4-byte type; all multi-byte integers are big-endian
//! - Dimensions live in the `ispe` (image spatial extents) property box,
//!   nested under `meta` -> `iprp` -> `ipco`
//!
//! Nesting is shallow, so the walk is a single forward scan with an offset
//! cursor: container boxes are entered by stepping past only their header
//! (`meta` is a full box with a version/flags field, so its header is 12
//! bytes instead of 8), everything else is skipped whole.

use crate::format::Format;
use crate::formats::{read_tag4, read_u32_be};
use crate::handler::FormatHandler;
use crate::info::Dimensions;

/// ftyp box type at offset 4
const FTYP_BOX: &[u8] = b"ftyp";

/// AVIF still / image-sequence brands
const AVIF_BRANDS: &[&[u8]] = &[b"avif", b"avis"];

/// Image spatial extents property box
const ISPE_BOX: &[u8] = b"ispe";

/// Containers the walk descends into
const META_BOX: &[u8] = b"meta";
const IPRP_BOX: &[u8] = b"iprp";
const IPCO_BOX: &[u8] = b"ipco";

/// Plain box header: size + type
const BOX_HEADER_SIZE: usize = 8;

/// Full box header: size + type + version/flags
const FULL_BOX_HEADER_SIZE: usize = 12;

/// AVIF format handler
#[derive(Debug, Clone, Copy, Default)]
pub struct AvifHandler;

impl FormatHandler for AvifHandler {
    fn can_handle(&self, data: &[u8]) -> bool {
        if read_tag4(data, 4) != Some(FTYP_BOX) {
            return false;
        }
        match read_tag4(data, 8) {
            Some(brand) => AVIF_BRANDS.contains(&brand),
            None => false,
        }
    }

    /// Walk the box sequence for an `ispe` box and read its extents
    ///
    /// Returns `None` for a zero box size (unknown-length boxes are not
    /// supported) or when the walk runs past the end of the buffer.
    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        let mut offset = 0usize;
        loop {
            let size = read_u32_be(data, offset)? as usize;
            let box_type = read_tag4(data, offset + 4)?;

            if size == 0 {
                return None;
            }

            if box_type == ISPE_BOX {
                let width = read_u32_be(data, offset + 12)?;
                let height = read_u32_be(data, offset + 16)?;
                return Some(Dimensions::new(width, height));
            }

            offset = if box_type == META_BOX {
                offset.checked_add(FULL_BOX_HEADER_SIZE)?
            } else if box_type == IPRP_BOX || box_type == IPCO_BOX {
                offset.checked_add(BOX_HEADER_SIZE)?
            } else {
                offset.checked_add(size)?
            };
        }
    }

    fn format(&self) -> Format {
        Format::Avif
    }
}
