//! Band search for patterns shorter than the image.

use crate::color::Color;
use crate::search::stream::scan_columns;
use crate::search::SearchConfig;
use crate::trace::{trace_event, trace_span};
use crate::util::PixFindResult;
use crate::ImageView;

/// Finds `pattern` in every horizontal band of its height.
///
/// Bands start at rows `0..=image.height() - pattern.height()` and are
/// scanned top to bottom with the full-height column scan. The offsets of all
/// bands are concatenated in band order; they are x offsets only and carry
/// no row information, so the same x can appear once per band. A pattern
/// taller than the image has no band and yields an empty result.
pub fn find_smaller_subimage(
    image: ImageView<'_, Color>,
    pattern: ImageView<'_, Color>,
    config: &SearchConfig,
) -> PixFindResult<Vec<usize>> {
    let positions = find_smaller_subimage_positions(image, pattern, config)?;
    Ok(positions.into_iter().map(|(x, _)| x).collect())
}

/// Like [`find_smaller_subimage`], but pairs each offset with the top row of
/// the band it was found in.
pub fn find_smaller_subimage_positions(
    image: ImageView<'_, Color>,
    pattern: ImageView<'_, Color>,
    config: &SearchConfig,
) -> PixFindResult<Vec<(usize, usize)>> {
    let Some(max_row) = image.height().checked_sub(pattern.height()) else {
        return Ok(Vec::new());
    };

    let _span = trace_span!(
        "find_smaller_subimage",
        width = image.width(),
        height = image.height(),
        bands = max_row + 1
    )
    .entered();

    #[cfg(feature = "rayon")]
    if config.parallel {
        let positions = crate::search::rayon::scan_bands_par(image, pattern, max_row, config)?;
        trace_event!("matches", count = positions.len());
        return Ok(positions);
    }

    let mut positions = Vec::new();
    for row in 0..=max_row {
        let band = band_at(image, pattern, row)?;
        let offsets = scan_columns(band, pattern, config);
        positions.extend(offsets.into_iter().map(|x| (x, row)));
    }

    trace_event!("matches", count = positions.len());
    Ok(positions)
}

/// Zero-copy band of the pattern's height starting at `row`.
pub(crate) fn band_at<'a>(
    image: ImageView<'a, Color>,
    pattern: ImageView<'_, Color>,
    row: usize,
) -> PixFindResult<ImageView<'a, Color>> {
    image.roi(0, row, image.width(), pattern.height())
}

#[cfg(test)]
mod tests {
    use super::{find_smaller_subimage, find_smaller_subimage_positions};
    use crate::color::Color;
    use crate::search::SearchConfig;
    use crate::ImageView;

    #[test]
    fn reports_band_rows() {
        // 4x3 white image with a black pixel at (2, 1).
        let mut img = vec![Color::WHITE; 12];
        img[4 + 2] = Color::BLACK;
        let pat = vec![Color::BLACK];
        let img_view = ImageView::from_slice(&img, 4, 3).unwrap();
        let pat_view = ImageView::from_slice(&pat, 1, 1).unwrap();

        let positions =
            find_smaller_subimage_positions(img_view, pat_view, &SearchConfig::default()).unwrap();
        assert_eq!(positions, vec![(2, 1)]);
    }

    #[test]
    fn taller_pattern_has_no_bands() {
        let img = vec![Color::WHITE; 4];
        let pat = vec![Color::WHITE; 3];
        let img_view = ImageView::from_slice(&img, 2, 2).unwrap();
        let pat_view = ImageView::from_slice(&pat, 1, 3).unwrap();
        let config = SearchConfig::default();

        let offsets = find_smaller_subimage(img_view, pat_view, &config).unwrap();
        assert!(offsets.is_empty());
        let positions = find_smaller_subimage_positions(img_view, pat_view, &config).unwrap();
        assert!(positions.is_empty());
    }

    #[test]
    fn uniform_pattern_repeats_per_band() {
        let img = vec![Color::WHITE; 9];
        let pat = vec![Color::WHITE; 2];
        let img_view = ImageView::from_slice(&img, 3, 3).unwrap();
        let pat_view = ImageView::from_slice(&pat, 1, 2).unwrap();
        let offsets = find_smaller_subimage(img_view, pat_view, &SearchConfig::default()).unwrap();
        assert_eq!(offsets, vec![0, 1, 2, 0, 1, 2]);
    }
}
