//! Intensity maps and their summed-area tables.
//!
//! Both grids are indexed `[x][y]` with x as the outer dimension and are
//! stored flat in column-major order (`x * height + y`).

use crate::color::{sum_channel_diff, Color};
use crate::ImageView;

/// Per-pixel distance from a reference color, scaled to `0..=255`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityMap {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl IntensityMap {
    /// Builds the map as `sum_channel_diff(pixel, reference) / 3`.
    pub fn build(view: ImageView<'_, Color>, reference: Color) -> Self {
        let width = view.width();
        let height = view.height();
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            let row = view.row(y).expect("row within view bounds");
            for (x, &pixel) in row.iter().enumerate() {
                // 765 / 3 == 255, so the quotient always fits.
                data[x * height + y] = (sum_channel_diff(pixel, reference) / 3) as u8;
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Intensity at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "intensity index out of bounds"
        );
        self.data[x * self.height + y]
    }
}

/// Summed-area table over an [`IntensityMap`].
///
/// `at(x, y)` is the sum of all intensities in `[0, x] × [0, y]`, so values
/// never decrease along either axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegralTable {
    data: Vec<u64>,
    width: usize,
    height: usize,
}

impl IntegralTable {
    /// Builds the table with the running-sum recurrence
    /// `t[x][y] = m[x][y] + t[x-1][y] + t[x][y-1] - t[x-1][y-1]`.
    pub fn build(map: &IntensityMap) -> Self {
        let width = map.width;
        let height = map.height;
        let mut data = vec![0u64; width * height];
        for x in 0..width {
            // Running sum of column x over rows 0..=y.
            let mut column = 0u64;
            for y in 0..height {
                column += u64::from(map.data[x * height + y]);
                let left = x.checked_sub(1).map_or(0, |prev| data[prev * height + y]);
                data[x * height + y] = column + left;
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cumulative sum over `[0, x] × [0, y]`. Panics when out of bounds.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> u64 {
        assert!(
            x < self.width && y < self.height,
            "integral index out of bounds"
        );
        self.data[x * self.height + y]
    }

    /// Exact sum over the inclusive rectangle `[x0, x1] × [y0, y1]`.
    ///
    /// Corners are clamped into the table; terms that would fall left of
    /// column 0 or above row 0 contribute zero.
    pub fn region_sum(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
        let x1 = x1.min(self.width - 1);
        let y1 = y1.min(self.height - 1);
        let x0 = x0.min(x1);
        let y0 = y0.min(y1);

        let total = self.at(x1, y1);
        let left = if x0 > 0 { self.at(x0 - 1, y1) } else { 0 };
        let top = if y0 > 0 { self.at(x1, y0 - 1) } else { 0 };
        let corner = if x0 > 0 && y0 > 0 {
            self.at(x0 - 1, y0 - 1)
        } else {
            0
        };
        total + corner - left - top
    }
}
