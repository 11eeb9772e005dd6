//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and compose.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::params::ComposeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Both operations take paths, not decoded images: the backend owns every
/// pixel buffer it touches, so nothing image-library-specific leaks into
/// the planning layer.
pub trait ImageBackend: Sync {
    /// Get image dimensions, with any EXIF orientation already applied
    /// (a rotated portrait photo reports portrait dimensions).
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a full card composition: decode, resize, shadow, blend,
    /// flatten, encode.
    fn compose(&self, params: &ComposeParams) -> Result<(), BackendError>;
}
