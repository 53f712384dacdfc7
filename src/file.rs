//! Path-based convenience layer
//!
//! Reads a file into memory and runs the byte-level probe over it. This is
//! the only part of the crate that performs I/O or can fail; the probe
//! itself stays total.

use crate::error::{ProbeError, ProbeResult};
use crate::format::{is_valid_file_size, DEFAULT_MAX_FILE_SIZE};
use crate::info::ImageInfo;
use std::path::Path;

/// Probe an image file on disk
///
/// The file size is validated against [`DEFAULT_MAX_FILE_SIZE`] before
/// reading; use [`probe_file_with_limit`] to pass an explicit limit.
///
/// # Example
///
/// ```rust,no_run
/// let info = imgprobe::probe_file("photo.jpg")?;
/// println!("{} {}x{}", info.format, info.width, info.height);
/// # Ok::<(), imgprobe::ProbeError>(())
/// ```
pub fn probe_file<P: AsRef<Path>>(path: P) -> ProbeResult<ImageInfo> {
    probe_file_with_limit(path, DEFAULT_MAX_FILE_SIZE)
}

/// Probe an image file on disk, bounding the bytes read
///
/// # Returns
///
/// * `Ok(ImageInfo)` for any file within the limit, including files that
///   are not images (those probe as unknown format)
/// * `Err(ProbeError::FileTooLarge)` when the file exceeds `limit`
/// * `Err(ProbeError::Io)` when the file cannot be read
pub fn probe_file_with_limit<P: AsRef<Path>>(path: P, limit: u64) -> ProbeResult<ImageInfo> {
    let path = path.as_ref();
    let size = std::fs::metadata(path)?.len();
    if !is_valid_file_size(size, Some(limit)) {
        return Err(ProbeError::FileTooLarge { size, limit });
    }

    let data = std::fs::read(path)?;
    Ok(crate::probe(&data))
}
