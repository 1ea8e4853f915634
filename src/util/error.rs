//! Error types for pixfind.

use thiserror::Error;

/// Result alias for pixfind operations.
pub type PixFindResult<T> = std::result::Result<T, PixFindError>;

/// Errors that can occur when constructing views or running searches.
///
/// Size mismatches between compared buffers are not errors: the comparison
/// functions report them through sentinel values instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PixFindError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is smaller than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer is shorter than the view requires.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Requested region does not fit inside the image.
    #[error("region {width}x{height} at ({x}, {y}) is outside the {img_width}x{img_height} image")]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Column scan requires the pattern to span the full image height.
    #[error("pattern height {pattern} does not match image height {image}")]
    PatternHeightMismatch { pattern: usize, image: usize },
    /// Loading or converting an image through the `image` crate failed.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
