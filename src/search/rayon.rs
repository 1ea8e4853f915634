//! Rayon-parallel band scanning (feature-gated).
//!
//! Each band is an independent column scan, so bands are distributed across
//! the pool and their results concatenated in band order. The column scan of
//! a single band stays sequential because its counters carry across columns.

use crate::color::Color;
use crate::search::band::band_at;
use crate::search::stream::scan_columns;
use crate::search::SearchConfig;
use crate::util::PixFindResult;
use crate::ImageView;
use rayon::prelude::*;

pub(crate) fn scan_bands_par(
    image: ImageView<'_, Color>,
    pattern: ImageView<'_, Color>,
    max_row: usize,
    config: &SearchConfig,
) -> PixFindResult<Vec<(usize, usize)>> {
    let per_band: Vec<PixFindResult<Vec<(usize, usize)>>> = (0..=max_row)
        .into_par_iter()
        .map(|row| {
            let band = band_at(image, pattern, row)?;
            let offsets = scan_columns(band, pattern, config);
            Ok(offsets.into_iter().map(|x| (x, row)).collect())
        })
        .collect();

    let mut positions = Vec::new();
    for band in per_band {
        positions.extend(band?);
    }
    Ok(positions)
}
