//! Black/white conversion.
//!
//! The adaptive binarizer compares each pixel's distance from a reference
//! color to the mean distance of its neighborhood, read in constant time from
//! a summed-area table. The fixed-cutoff variants are kept for inputs with
//! even lighting.

pub mod adaptive;
pub mod global;
pub mod integral;

pub use adaptive::{binarize_adaptive, local_threshold};
pub use global::{binarize_color, binarize_global};
pub use integral::{IntegralTable, IntensityMap};

use crate::color::Color;

/// Configuration for [`binarize_adaptive`].
#[derive(Clone, Debug)]
pub struct BinarizeConfig {
    /// Color intensities are measured from.
    pub reference: Color,
    /// Side of the square neighborhood; the window reaches `region_size / 2`
    /// pixels in each direction.
    pub region_size: u16,
    /// Swap foreground and background levels.
    pub invert: bool,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self {
            reference: Color::BLACK,
            region_size: 15,
            invert: false,
        }
    }
}

impl BinarizeConfig {
    pub fn with_reference(mut self, reference: Color) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_region_size(mut self, region_size: u16) -> Self {
        self.region_size = region_size;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

/// Foreground/background gray levels.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Levels {
    pub(crate) fg: u8,
    pub(crate) bg: u8,
}

impl Levels {
    pub(crate) fn new(invert: bool) -> Self {
        if invert {
            Self { fg: 0, bg: 255 }
        } else {
            Self { fg: 255, bg: 0 }
        }
    }
}
