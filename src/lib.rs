//! Header-only image metadata probe
//!
//! imgprobe inspects the leading bytes of an image file to determine its
//! container format (JPEG, PNG, GIF, WebP, AVIF) and its pixel dimensions,
//! without decoding any pixel data. The implementation is pure Rust and
//! cross-platform compatible.
//!
//! Every byte-level operation is total: malformed, truncated, or
//! unrecognized input degrades to [`Format::Unknown`] and the
//! [`Dimensions::FALLBACK`] dimensions rather than returning an error.
//! The probed metadata is advisory (downstream compression heuristics),
//! so a best-effort answer is always preferable to a failure.
//!
//! # Example
//!
//! ```
//! use imgprobe::{probe, Format, Orientation};
//!
//! // PNG signature followed by the IHDR chunk header and dimensions.
//! let mut png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
//! png.extend_from_slice(&13u32.to_be_bytes());
//! png.extend_from_slice(b"IHDR");
//! png.extend_from_slice(&640u32.to_be_bytes());
//! png.extend_from_slice(&480u32.to_be_bytes());
//!
//! let info = probe(&png);
//! assert_eq!(info.format, Format::Png);
//! assert_eq!((info.width, info.height), (640, 480));
//! assert_eq!(info.orientation, Orientation::Landscape);
//! ```

pub mod error;
pub mod file;
pub mod format;
pub mod formats;
pub mod handler;
pub mod info;
pub mod registry;

pub use error::{ProbeError, ProbeResult};
pub use file::{probe_file, probe_file_with_limit};
pub use format::{
    content_type_for, extension_for, is_supported_format, is_valid_file_size, Format,
    DEFAULT_MAX_FILE_SIZE,
};
pub use handler::FormatHandler;
pub use info::{Dimensions, ImageInfo, Orientation};
pub use registry::{default_registry, Handler, HandlerRegistry};

/// Detect the container format from the leading bytes of a buffer.
///
/// At most the first 12 bytes are inspected. Buffers shorter than any
/// signature simply fail to match and classify as [`Format::Unknown`].
pub fn detect_format(data: &[u8]) -> Format {
    match default_registry().find_by_detection(data) {
        Some(handler) => handler.format(),
        None => Format::Unknown,
    }
}

/// Read pixel dimensions from a buffer, detecting the format first.
///
/// Unknown formats and unparseable structures yield
/// [`Dimensions::FALLBACK`]; this function never fails.
pub fn read_dimensions(data: &[u8]) -> Dimensions {
    default_registry()
        .find_by_detection(data)
        .and_then(|handler| handler.read_dimensions(data))
        .unwrap_or(Dimensions::FALLBACK)
}

/// Probe a buffer for format, dimensions, and orientation in one pass.
///
/// The returned [`ImageInfo`] is a pure function of the buffer's bytes:
/// probing the same buffer twice yields identical records.
pub fn probe(data: &[u8]) -> ImageInfo {
    let registry = default_registry();
    match registry.find_by_detection(data) {
        Some(handler) => {
            let dimensions = handler
                .read_dimensions(data)
                .unwrap_or(Dimensions::FALLBACK);
            ImageInfo::new(handler.format(), dimensions)
        }
        None => ImageInfo::new(Format::Unknown, Dimensions::FALLBACK),
    }
}
