//! Sub-image search by streaming column scan.
//!
//! [`find_subimage`] handles patterns that span the full image height and
//! reports every left edge where the pattern was accepted. Shorter patterns go
//! through [`find_smaller_subimage`], which runs the same scan over every
//! horizontal band of the pattern's height.

mod band;
mod stream;

#[cfg(feature = "rayon")]
mod rayon;

pub use band::{find_smaller_subimage, find_smaller_subimage_positions};
pub use stream::find_subimage;

/// Search parameters shared by the column scans.
///
/// With the default `enough_similarity` of `usize::MAX` a candidate is only
/// accepted after every pattern column has been compared, which makes the
/// result equal to an exhaustive window comparison with the same mismatch
/// budget. Lower values let the scan accept a candidate as soon as enough
/// similar pixels were seen; the reported offsets then depend on scan order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Dissimilar pixels tolerated before a candidate is rejected.
    pub max_mismatch: usize,
    /// Similar pixels after which a candidate is accepted early.
    pub enough_similarity: usize,
    /// Count mismatches involving a non-extreme gray pixel as similar.
    ///
    /// Meant for already binarized inputs, where such pixels are
    /// anti-aliased edges.
    pub gray_exception: bool,
    /// Largest per-channel difference still treated as the same color.
    pub color_tolerance: u8,
    /// Scan bands on the rayon pool when the `rayon` feature is enabled.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_mismatch: 0,
            enough_similarity: usize::MAX,
            gray_exception: false,
            color_tolerance: 0,
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Config with the given mismatch budget and early-acceptance count.
    pub fn new(max_mismatch: usize, enough_similarity: usize) -> Self {
        Self {
            max_mismatch,
            enough_similarity,
            ..Self::default()
        }
    }

    pub fn with_gray_exception(mut self, gray_exception: bool) -> Self {
        self.gray_exception = gray_exception;
        self
    }

    pub fn with_color_tolerance(mut self, color_tolerance: u8) -> Self {
        self.color_tolerance = color_tolerance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
