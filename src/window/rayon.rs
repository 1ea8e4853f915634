//! Rayon-parallel containment check (feature-gated).

use crate::color::Color;
use crate::trace::trace_span;
use crate::window::{column_contains, placement_range};
use crate::ImageView;
use rayon::prelude::*;

/// Column-parallel variant of [`contains`](crate::window::contains).
///
/// Each thread checks every window whose left edge lies in its columns; the
/// answer is identical to the sequential scan.
pub fn contains_par(
    haystack: ImageView<'_, Color>,
    needle: ImageView<'_, Color>,
    color_tolerance: u8,
    allowed_mismatches: usize,
) -> bool {
    let _span = trace_span!(
        "contains",
        width = haystack.width(),
        height = haystack.height(),
        parallel = true
    )
    .entered();

    let Some((max_x, max_y)) = placement_range(haystack, needle) else {
        return false;
    };

    (0..=max_x).into_par_iter().any(|x| {
        column_contains(
            haystack,
            needle,
            x,
            max_y,
            color_tolerance,
            allowed_mismatches,
        )
    })
}
