//! Streaming column scan for full-height patterns.
//!
//! The scan head walks the image one column at a time while a candidate
//! start position is "open". Each image column is compared against the next
//! pattern column, and the similar/dissimilar counters carry over from one
//! column to the next, so a candidate is decided as soon as either counter
//! crosses its limit:
//!
//! - too many dissimilar pixels: the candidate is dropped and the scan
//!   resumes one column after the dropped start;
//! - enough similar pixels: the start is recorded and the scan jumps past
//!   the pattern width;
//! - every pattern column compared without a decision: the start is recorded
//!   as well.
//!
//! Decisions are taken pixel by pixel, so a candidate can be accepted in the
//! middle of a column.

use crate::color::{max_channel_diff, Color};
use crate::search::SearchConfig;
use crate::trace::{trace_event, trace_span};
use crate::util::{PixFindError, PixFindResult};
use crate::ImageView;

/// Finds every left edge where `pattern` occurs in `image`.
///
/// Both images must have the same height. Offsets are returned in scan
/// order, which is ascending; matches never overlap because an accepted
/// candidate consumes the full pattern width.
pub fn find_subimage(
    image: ImageView<'_, Color>,
    pattern: ImageView<'_, Color>,
    config: &SearchConfig,
) -> PixFindResult<Vec<usize>> {
    if pattern.height() != image.height() {
        return Err(PixFindError::PatternHeightMismatch {
            pattern: pattern.height(),
            image: image.height(),
        });
    }

    let _span = trace_span!(
        "find_subimage",
        width = image.width(),
        height = image.height(),
        pattern_width = pattern.width()
    )
    .entered();

    let offsets = scan_columns(image, pattern, config);
    trace_event!("matches", count = offsets.len());
    Ok(offsets)
}

/// How a column comparison ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColumnOutcome {
    Rejected,
    Accepted,
    Exhausted,
}

/// Counters of the currently open candidate.
#[derive(Default)]
struct Candidate {
    similar: usize,
    dissimilar: usize,
    /// Pattern column compared against the image column under the head.
    col: usize,
}

impl Candidate {
    /// Compares image column `x` with pattern column `self.col`.
    fn compare_column(
        &mut self,
        image: ImageView<'_, Color>,
        pattern: ImageView<'_, Color>,
        x: usize,
        config: &SearchConfig,
    ) -> ColumnOutcome {
        for y in 0..image.height() {
            if pixels_similar(image.pixel(x, y), pattern.pixel(self.col, y), config) {
                self.similar += 1;
            } else {
                self.dissimilar += 1;
            }

            if self.dissimilar > config.max_mismatch {
                return ColumnOutcome::Rejected;
            }
            if self.similar >= config.enough_similarity {
                return ColumnOutcome::Accepted;
            }
        }
        ColumnOutcome::Exhausted
    }
}

/// Pixel predicate of the scan.
///
/// With the gray exception a mismatch is forgiven when either pixel is an
/// intermediate gray, since binarized inputs only carry those on edges.
#[inline]
fn pixels_similar(a: Color, b: Color, config: &SearchConfig) -> bool {
    if max_channel_diff(a, b) <= config.color_tolerance {
        return true;
    }
    config.gray_exception && (a.is_intermediate_gray() || b.is_intermediate_gray())
}

/// Runs the scan; callers guarantee equal heights.
pub(crate) fn scan_columns(
    image: ImageView<'_, Color>,
    pattern: ImageView<'_, Color>,
    config: &SearchConfig,
) -> Vec<usize> {
    debug_assert_eq!(image.height(), pattern.height());

    let width = image.width();
    let pattern_width = pattern.width();
    let mut offsets = Vec::new();
    let mut cand = Candidate::default();
    let mut x = 0usize;

    while x < width {
        match cand.compare_column(image, pattern, x, config) {
            ColumnOutcome::Rejected => {
                // Reopen at the column after the rejected start.
                x = x - cand.col + 1;
                cand = Candidate::default();
            }
            ColumnOutcome::Accepted => {
                let start = x - cand.col;
                offsets.push(start);
                x = start + pattern_width;
                cand = Candidate::default();
            }
            ColumnOutcome::Exhausted => {
                cand.col += 1;
                if cand.col == pattern_width {
                    offsets.push(x + 1 - pattern_width);
                    cand = Candidate::default();
                }
                x += 1;
            }
        }
    }

    offsets
}
