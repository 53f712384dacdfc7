//! Image container formats and format-key lookups
//!
//! The format keys recognized by the string lookups are `jpeg`, `jpg`,
//! `png`, `gif`, `webp`, and `avif`. Matching is case-insensitive; unknown
//! keys fall back to a generic binary content type or to the key itself as
//! extension, never to an error.

use std::fmt;

/// Generic content type returned for unrecognized formats
const OCTET_STREAM: &str = "application/octet-stream";

/// Default upper bound for file-size validation (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Image container format, classified from magic bytes
///
/// `Unknown` is a valid, non-error outcome: a buffer that matches no
/// signature still probes successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    Jpeg,
    Png,
    Gif,
    Webp,
    Avif,
    Unknown,
}

impl Format {
    /// Lowercase format name (e.g. "jpeg", "webp")
    pub fn name(&self) -> &'static str {
        match self {
            Format::Jpeg => "jpeg",
            Format::Png => "png",
            Format::Gif => "gif",
            Format::Webp => "webp",
            Format::Avif => "avif",
            Format::Unknown => "unknown",
        }
    }

    /// MIME content type for the format
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Jpeg => "image/jpeg",
            Format::Png => "image/png",
            Format::Gif => "image/gif",
            Format::Webp => "image/webp",
            Format::Avif => "image/avif",
            Format::Unknown => OCTET_STREAM,
        }
    }

    /// File extensions associated with the format, preferred first
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Jpeg => &["jpg", "jpeg"],
            Format::Png => &["png"],
            Format::Gif => &["gif"],
            Format::Webp => &["webp"],
            Format::Avif => &["avif"],
            Format::Unknown => &[],
        }
    }

    /// Parse a format key (case-insensitive)
    ///
    /// Accepts the six recognized keys; both "jpeg" and "jpg" map to
    /// [`Format::Jpeg`]. Returns `None` for anything else.
    pub fn from_key(key: &str) -> Option<Format> {
        match key.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Some(Format::Jpeg),
            "png" => Some(Format::Png),
            "gif" => Some(Format::Gif),
            "webp" => Some(Format::Webp),
            "avif" => Some(Format::Avif),
            _ => None,
        }
    }

    /// Whether the format is one of the recognized image containers
    pub fn is_supported(&self) -> bool {
        !matches!(self, Format::Unknown)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the MIME content type for a format key
///
/// Unknown keys fall back to `application/octet-stream`.
pub fn content_type_for(key: &str) -> &'static str {
    match Format::from_key(key) {
        Some(format) => format.content_type(),
        None => OCTET_STREAM,
    }
}

/// Look up the preferred file extension for a format key
///
/// Unknown keys fall back to the key itself.
pub fn extension_for(key: &str) -> &str {
    match Format::from_key(key) {
        Some(format) => format.extensions()[0],
        None => key,
    }
}

/// Case-insensitive membership test against the recognized format keys
pub fn is_supported_format(key: &str) -> bool {
    Format::from_key(key).is_some()
}

/// Validate a file size against a limit, defaulting to
/// [`DEFAULT_MAX_FILE_SIZE`]
pub fn is_valid_file_size(size: u64, max_size: Option<u64>) -> bool {
    size <= max_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
}
