//! Fixed-cutoff binarization.

use crate::color::{max_channel_diff, Color};
use crate::image::OwnedImage;
use crate::threshold::Levels;
use crate::trace::trace_span;
use crate::ImageView;

/// Binarizes with one cutoff for the whole image.
///
/// A pixel whose R, G and B all exceed `limit` becomes white, any other pixel
/// black; `invert` swaps the two.
pub fn binarize_global(view: ImageView<'_, Color>, limit: u8, invert: bool) -> OwnedImage<Color> {
    let _span = trace_span!("binarize_global", limit = limit).entered();
    let levels = Levels::new(invert);
    map_pixels(view, |c| {
        if c.r > limit && c.g > limit && c.b > limit {
            Color::gray(levels.fg, u8::MAX)
        } else {
            Color::gray(levels.bg, u8::MAX)
        }
    })
}

/// Masks pixels close to `color`.
///
/// Pixels within `tolerance` of `color` (largest channel difference) become
/// black and all others white; `invert` swaps the two.
pub fn binarize_color(
    view: ImageView<'_, Color>,
    color: Color,
    tolerance: u8,
    invert: bool,
) -> OwnedImage<Color> {
    let _span = trace_span!("binarize_color", tolerance = tolerance).entered();
    let (hit, miss) = if invert {
        (Color::WHITE, Color::BLACK)
    } else {
        (Color::BLACK, Color::WHITE)
    };
    map_pixels(view, |c| {
        if max_channel_diff(c, color) <= tolerance {
            hit
        } else {
            miss
        }
    })
}

fn map_pixels<F>(view: ImageView<'_, Color>, f: F) -> OwnedImage<Color>
where
    F: Fn(Color) -> Color,
{
    let data = view.pixels().map(f).collect();
    OwnedImage::new(data, view.width(), view.height())
        .expect("output matches the dimensions of a valid view")
}
