//! Brute-force comparison of equally sized images and windows.
//!
//! These are the exhaustive counterparts of the streaming column search:
//! they compare every pixel pair and are used for exact or fuzzy equality,
//! containment checks, and holistic difference scores. Comparing images of
//! different sizes is not an error; it yields `false` or a sentinel value.

use crate::color::{max_channel_diff, sum_channel_diff, Color};
use crate::trace::{trace_event, trace_span};
use crate::ImageView;

#[cfg(feature = "rayon")]
mod rayon;

#[cfg(feature = "rayon")]
pub use self::rayon::contains_par;

/// Returned by [`difference`] when the two images differ in size.
pub const INCOMPARABLE: usize = usize::MAX;

/// Returns true when `a` and `b` have the same size and at most
/// `allowed_mismatches` pixels differ by more than `color_tolerance` on any
/// channel.
pub fn windows_equal(
    a: ImageView<'_, Color>,
    b: ImageView<'_, Color>,
    color_tolerance: u8,
    allowed_mismatches: usize,
) -> bool {
    if a.size() != b.size() {
        return false;
    }

    let mut mismatches = 0usize;
    for x in 0..a.width() {
        for y in 0..a.height() {
            if max_channel_diff(a.pixel(x, y), b.pixel(x, y)) > color_tolerance {
                mismatches += 1;
                if mismatches > allowed_mismatches {
                    return false;
                }
            }
        }
    }
    true
}

/// Returns true when some window of `haystack` equals `needle` under
/// [`windows_equal`].
///
/// Windows are visited column by column (x outer, y inner) and the scan stops
/// at the first hit. A needle larger than the haystack is never contained.
pub fn contains(
    haystack: ImageView<'_, Color>,
    needle: ImageView<'_, Color>,
    color_tolerance: u8,
    allowed_mismatches: usize,
) -> bool {
    let _span = trace_span!(
        "contains",
        width = haystack.width(),
        height = haystack.height(),
        needle_width = needle.width(),
        needle_height = needle.height()
    )
    .entered();

    let Some((max_x, max_y)) = placement_range(haystack, needle) else {
        return false;
    };

    for x in 0..=max_x {
        let hit = column_contains(
            haystack,
            needle,
            x,
            max_y,
            color_tolerance,
            allowed_mismatches,
        );
        if hit {
            trace_event!("contains_hit", x = x);
            return true;
        }
    }
    false
}

/// Number of pixels whose largest channel difference exceeds
/// `allowed_color_diff`, or [`INCOMPARABLE`] when sizes differ.
pub fn difference(
    a: ImageView<'_, Color>,
    b: ImageView<'_, Color>,
    allowed_color_diff: u8,
) -> usize {
    if a.size() != b.size() {
        return INCOMPARABLE;
    }
    a.pixels()
        .zip(b.pixels())
        .filter(|&(p, q)| max_channel_diff(p, q) > allowed_color_diff)
        .count()
}

/// Sum of [`max_channel_diff`] over all pixel pairs, or `u64::MAX` when
/// sizes differ.
pub fn total_max_channel_diff(a: ImageView<'_, Color>, b: ImageView<'_, Color>) -> u64 {
    aggregate(a, b, |p, q| u64::from(max_channel_diff(p, q)))
}

/// Sum of [`sum_channel_diff`] over all pixel pairs, or `u64::MAX` when
/// sizes differ.
pub fn total_sum_channel_diff(a: ImageView<'_, Color>, b: ImageView<'_, Color>) -> u64 {
    aggregate(a, b, |p, q| u64::from(sum_channel_diff(p, q)))
}

fn aggregate<F>(a: ImageView<'_, Color>, b: ImageView<'_, Color>, metric: F) -> u64
where
    F: Fn(Color, Color) -> u64,
{
    if a.size() != b.size() {
        return u64::MAX;
    }
    a.pixels().zip(b.pixels()).map(|(p, q)| metric(p, q)).sum()
}

/// Last valid top-left coordinates for placing `needle` in `haystack`.
fn placement_range(
    haystack: ImageView<'_, Color>,
    needle: ImageView<'_, Color>,
) -> Option<(usize, usize)> {
    let max_x = haystack.width().checked_sub(needle.width())?;
    let max_y = haystack.height().checked_sub(needle.height())?;
    Some((max_x, max_y))
}

/// Checks every window whose left edge is at column `x`.
fn column_contains(
    haystack: ImageView<'_, Color>,
    needle: ImageView<'_, Color>,
    x: usize,
    max_y: usize,
    color_tolerance: u8,
    allowed_mismatches: usize,
) -> bool {
    (0..=max_y).any(|y| {
        let window = haystack
            .roi(x, y, needle.width(), needle.height())
            .expect("window within placement range");
        windows_equal(window, needle, color_tolerance, allowed_mismatches)
    })
}
