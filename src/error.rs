//! Error types for probe operations
//!
//! The byte-level probe API is total and never returns errors; these types
//! exist for the path-based convenience layer, which performs real I/O.

use thiserror::Error;

/// Error types for file-based probe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    /// IO error while reading the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured size limit
    #[error("file too large: {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },
}

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
