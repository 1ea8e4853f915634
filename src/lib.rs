//! pixfind locates sub-images inside larger RGBA images under per-pixel color
//! tolerance and binarizes images with a locally adaptive threshold.
//!
//! The main entry points are the streaming column scan
//! ([`find_subimage`], [`find_smaller_subimage`]), the exhaustive window
//! matcher ([`windows_equal`], [`contains`], [`difference`]) and the
//! integral-image binarizer ([`binarize_adaptive`]). All of them borrow their
//! inputs as [`ImageView`]s and never modify them; outputs are freshly
//! allocated [`OwnedImage`]s.
//!
//! Optional features: `rayon` for band- and window-parallel variants,
//! `image-io` for loading and saving through the `image` crate, `tracing` for
//! spans around every top-level operation.

pub mod color;
pub mod image;
pub mod search;
pub mod stats;
pub mod threshold;
mod trace;
pub mod util;
pub mod window;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use crate::color::{colors_equal, max_channel_diff, sum_channel_diff, Channel, Color};
pub use crate::image::{ImageView, OwnedImage};
pub use crate::search::{
    find_smaller_subimage, find_smaller_subimage_positions, find_subimage, SearchConfig,
};
pub use crate::threshold::{
    binarize_adaptive, local_threshold, BinarizeConfig, IntegralTable, IntensityMap,
};
pub use crate::util::{PixFindError, PixFindResult};
pub use crate::window::{contains, difference, windows_equal, INCOMPARABLE};

#[cfg(feature = "rayon")]
pub use crate::window::contains_par;
