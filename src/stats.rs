//! Whole-image color statistics.

use crate::color::{colors_equal, Color};
use crate::ImageView;

/// Fractions of pixels dominated by red, green and blue.
///
/// A pixel is dominated by a channel when that channel exceeds the sum of the
/// other two; a pixel counts for at most one channel, checked in R, G, B
/// order.
pub fn dominant_channel_ratios(view: ImageView<'_, Color>) -> [f64; 3] {
    let mut counts = [0usize; 3];
    for c in view.pixels() {
        let (r, g, b) = (u16::from(c.r), u16::from(c.g), u16::from(c.b));
        if r > g + b {
            counts[0] += 1;
        } else if g > r + b {
            counts[1] += 1;
        } else if b > r + g {
            counts[2] += 1;
        }
    }
    let total = (view.width() * view.height()) as f64;
    counts.map(|count| count as f64 / total)
}

/// One entry of [`dominant_channel_ratios`]; selectors outside `0..=2`
/// yield 0.0.
pub fn dominant_channel_ratio(view: ImageView<'_, Color>, index: usize) -> f64 {
    if index > 2 {
        return 0.0;
    }
    dominant_channel_ratios(view)[index]
}

/// Fraction of pixels equal to `color` (alpha ignored).
pub fn color_ratio(view: ImageView<'_, Color>, color: Color) -> f64 {
    let count = view.pixels().filter(|&c| colors_equal(c, color)).count();
    count as f64 / (view.width() * view.height()) as f64
}

/// True when every pixel equals `color` (alpha ignored).
pub fn is_uniform(view: ImageView<'_, Color>, color: Color) -> bool {
    view.pixels().all(|c| colors_equal(c, color))
}

/// True when the image is entirely white.
pub fn is_blank(view: ImageView<'_, Color>) -> bool {
    is_uniform(view, Color::WHITE)
}
