//! Local mean thresholding over an integral table.

use crate::color::Color;
use crate::image::OwnedImage;
use crate::threshold::integral::{IntegralTable, IntensityMap};
use crate::threshold::{BinarizeConfig, Levels};
use crate::trace::{trace_event, trace_span};
use crate::ImageView;

/// Mean-intensity threshold of the window centered on `(x, y)`.
///
/// The window spans `region_size / 2` pixels on each side and is clamped to
/// the table. Its sum is taken as `d - c - b + a` over the table values at
/// the four clamped corners, then divided by the window width and height in
/// turn (truncating). Because the corners themselves are the clamped window
/// bounds, the first window row and column do not contribute to the sum
/// while still counting towards the divisor.
///
/// # Panics
///
/// Panics if `x >= table.width()` or `y >= table.height()`.
pub fn local_threshold(table: &IntegralTable, x: usize, y: usize, region_size: u16) -> u8 {
    assert!(
        x < table.width() && y < table.height(),
        "threshold position out of bounds"
    );
    let rad = usize::from(region_size / 2);

    let min_x = x.saturating_sub(rad);
    let max_x = x.saturating_add(rad).min(table.width() - 1);
    let min_y = y.saturating_sub(rad);
    let max_y = y.saturating_add(rad).min(table.height() - 1);

    let a = table.at(min_x, min_y);
    let b = table.at(max_x, min_y);
    let c = table.at(min_x, max_y);
    let d = table.at(max_x, max_y);

    let sum = d + a - c - b;
    let mean = sum / (max_x - min_x + 1) as u64 / (max_y - min_y + 1) as u64;
    mean.min(u64::from(u8::MAX)) as u8
}

/// Binarizes an image against a per-pixel local threshold.
///
/// Intensity is the distance from `config.reference`. A pixel whose intensity
/// exceeds its local threshold takes the foreground level, every other pixel
/// the background level. Output pixels are gray with alpha 0.
pub fn binarize_adaptive(view: ImageView<'_, Color>, config: &BinarizeConfig) -> OwnedImage<Color> {
    let _span = trace_span!(
        "binarize_adaptive",
        width = view.width(),
        height = view.height(),
        region = config.region_size
    )
    .entered();

    let map = IntensityMap::build(view, config.reference);
    let table = IntegralTable::build(&map);
    let levels = Levels::new(config.invert);

    let mut foreground = 0usize;
    let mut data = Vec::with_capacity(view.width() * view.height());
    for y in 0..view.height() {
        for x in 0..view.width() {
            let threshold = local_threshold(&table, x, y, config.region_size);
            let value = if map.at(x, y) > threshold {
                foreground += 1;
                levels.fg
            } else {
                levels.bg
            };
            data.push(Color::gray(value, 0));
        }
    }

    trace_event!("foreground_pixels", count = foreground);
    OwnedImage::new(data, view.width(), view.height())
        .expect("output matches the dimensions of a valid view")
}
