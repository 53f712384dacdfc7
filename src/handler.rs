//! Format handler trait
//!
//! This module defines the trait that all format handlers must implement.
//! This allows for a unified interface across different image containers.

use crate::format::Format;
use crate::info::Dimensions;

/// Trait for image format handlers
///
/// All format handlers (JPEG, PNG, GIF, WebP, AVIF) implement this trait to
/// provide a unified interface for signature checks and dimension reads.
/// Handlers are stateless: every method is a pure function of the input
/// buffer, and no method may panic on short or malformed input.
pub trait FormatHandler: Send + Sync {
    /// Check if this handler can handle the given buffer
    ///
    /// This method peeks at the leading bytes (at most 12) to determine
    /// whether the buffer matches the handler's signature. Buffers shorter
    /// than the signature simply fail to match.
    fn can_handle(&self, data: &[u8]) -> bool;

    /// Read pixel dimensions from the buffer
    ///
    /// Assumes the buffer already matched [`FormatHandler::can_handle`].
    /// Returns `None` when the structure cannot be parsed far enough to
    /// find real dimensions; the caller substitutes the fallback.
    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions>;

    /// The container format this handler recognizes
    fn format(&self) -> Format;

    /// Get the file extensions this handler supports
    ///
    /// # Returns
    ///
    /// A slice of file extensions (e.g., &["jpg", "jpeg"] for JPEG)
    fn extensions(&self) -> &'static [&'static str] {
        self.format().extensions()
    }

    /// MIME content type of the container format
    fn content_type(&self) -> &'static str {
        self.format().content_type()
    }
}
