//! Format handler registry
//!
//! This module provides a registry system for managing format handlers.
//! Handlers can be looked up by file extension or by signature detection
//! over a byte buffer.

use crate::format::Format;
use crate::formats::avif::AvifHandler;
use crate::formats::gif::GifHandler;
use crate::formats::jpeg::JpegHandler;
use crate::formats::png::PngHandler;
use crate::formats::webp::WebpHandler;
use crate::handler::FormatHandler;
use crate::info::Dimensions;

/// Enum of supported format handlers
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Handler {
    Jpeg(JpegHandler),
    Png(PngHandler),
    Gif(GifHandler),
    Webp(WebpHandler),
    Avif(AvifHandler),
}

impl FormatHandler for Handler {
    fn can_handle(&self, data: &[u8]) -> bool {
        match self {
            Handler::Jpeg(h) => h.can_handle(data),
            Handler::Png(h) => h.can_handle(data),
            Handler::Gif(h) => h.can_handle(data),
            Handler::Webp(h) => h.can_handle(data),
            Handler::Avif(h) => h.can_handle(data),
        }
    }

    fn read_dimensions(&self, data: &[u8]) -> Option<Dimensions> {
        match self {
            Handler::Jpeg(h) => h.read_dimensions(data),
            Handler::Png(h) => h.read_dimensions(data),
            Handler::Gif(h) => h.read_dimensions(data),
            Handler::Webp(h) => h.read_dimensions(data),
            Handler::Avif(h) => h.read_dimensions(data),
        }
    }

    fn format(&self) -> Format {
        match self {
            Handler::Jpeg(h) => h.format(),
            Handler::Png(h) => h.format(),
            Handler::Gif(h) => h.format(),
            Handler::Webp(h) => h.format(),
            Handler::Avif(h) => h.format(),
        }
    }
}

/// Registry for format handlers
pub struct HandlerRegistry {
    handlers: Vec<Handler>,
}

impl HandlerRegistry {
    /// Create a new handler registry with default handlers registered
    pub fn new() -> Self {
        let mut registry = Self {
            handlers: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    /// Register a format handler
    pub fn register(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    /// Register default handlers (JPEG, PNG, GIF, WebP, AVIF)
    ///
    /// Signatures are mutually exclusive, so registration order only fixes
    /// which handler answers first.
    fn register_defaults(&mut self) {
        self.register(Handler::Jpeg(JpegHandler));
        self.register(Handler::Png(PngHandler));
        self.register(Handler::Gif(GifHandler));
        self.register(Handler::Webp(WebpHandler));
        self.register(Handler::Avif(AvifHandler));
    }

    /// Find a handler by file extension
    ///
    /// # Arguments
    ///
    /// * `extension` - File extension (e.g., "jpg", "png", "webp")
    ///
    /// # Returns
    ///
    /// * `Some(&Handler)` if a handler is found
    /// * `None` if no handler matches the extension
    pub fn find_by_extension(&self, extension: &str) -> Option<&Handler> {
        let ext_lower = extension.to_lowercase();
        self.handlers
            .iter()
            .find(|h| h.extensions().iter().any(|e| *e == ext_lower))
    }

    /// Find a handler by signature detection
    ///
    /// Tries each registered handler's `can_handle` in order; the first
    /// match wins.
    ///
    /// # Returns
    ///
    /// * `Some(&Handler)` if a handler matches the buffer's signature
    /// * `None` if no handler recognizes the buffer
    pub fn find_by_detection(&self, data: &[u8]) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.can_handle(data))
    }

    /// Get all registered handlers
    pub fn handlers(&self) -> &[Handler] {
        &self.handlers
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global default registry instance
///
/// This provides a convenient way to access the default handler registry
/// without needing to create a new instance.
pub fn default_registry() -> HandlerRegistry {
    HandlerRegistry::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_new() {
        let registry = HandlerRegistry::new();
        assert_eq!(registry.handlers().len(), 5);
    }

    #[test]
    fn test_find_by_extension() {
        let registry = HandlerRegistry::new();

        assert!(registry.find_by_extension("jpg").is_some());
        assert!(registry.find_by_extension("jpeg").is_some());
        assert!(registry.find_by_extension("png").is_some());
        assert!(registry.find_by_extension("gif").is_some());
        assert!(registry.find_by_extension("webp").is_some());
        assert!(registry.find_by_extension("avif").is_some());
        assert!(registry.find_by_extension("AVIF").is_some());

        // Unknown extension
        assert!(registry.find_by_extension("tiff").is_none());
        assert!(registry.find_by_extension("xyz").is_none());
    }

    #[test]
    fn test_find_by_detection_jpeg() {
        let registry = HandlerRegistry::new();
        let jpeg_data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        let handler = registry.find_by_detection(&jpeg_data);
        assert_eq!(handler.map(|h| h.format()), Some(Format::Jpeg));
    }

    #[test]
    fn test_find_by_detection_png() {
        let registry = HandlerRegistry::new();
        let png_data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let handler = registry.find_by_detection(&png_data);
        assert_eq!(handler.map(|h| h.format()), Some(Format::Png));
    }

    #[test]
    fn test_find_by_detection_gif() {
        let registry = HandlerRegistry::new();
        // GIF89a signature
        let gif_data = vec![0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x00, 0x00];
        let handler = registry.find_by_detection(&gif_data);
        assert_eq!(handler.map(|h| h.format()), Some(Format::Gif));
    }

    #[test]
    fn test_find_by_detection_webp() {
        let registry = HandlerRegistry::new();
        let mut webp_data = b"RIFF".to_vec();
        webp_data.extend_from_slice(&24u32.to_le_bytes());
        webp_data.extend_from_slice(b"WEBP");
        let handler = registry.find_by_detection(&webp_data);
        assert_eq!(handler.map(|h| h.format()), Some(Format::Webp));
    }

    #[test]
    fn test_find_by_detection_avif() {
        let registry = HandlerRegistry::new();
        let mut avif_data = 16u32.to_be_bytes().to_vec();
        avif_data.extend_from_slice(b"ftyp");
        avif_data.extend_from_slice(b"avif");
        avif_data.extend_from_slice(&0u32.to_be_bytes());
        let handler = registry.find_by_detection(&avif_data);
        assert_eq!(handler.map(|h| h.format()), Some(Format::Avif));
    }

    #[test]
    fn test_find_by_detection_unknown() {
        let registry = HandlerRegistry::new();
        // Random data that doesn't match any signature
        let unknown_data = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        assert!(registry.find_by_detection(&unknown_data).is_none());
    }
}
