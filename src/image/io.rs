//! Convenience helpers for moving pixels between `image` buffers and pixfind.
//!
//! Available when the `image-io` feature is enabled.

use crate::color::Color;
use crate::image::OwnedImage;
use crate::util::{PixFindError, PixFindResult};
use std::path::Path;

/// Creates an owned color image from an RGBA image buffer.
pub fn owned_from_rgba_image(img: &image::RgbaImage) -> PixFindResult<OwnedImage<Color>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| Color::from(p.0)).collect();
    OwnedImage::new(data, width, height)
}

/// Creates an owned color image from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> PixFindResult<OwnedImage<Color>> {
    let rgba = img.to_rgba8();
    owned_from_rgba_image(&rgba)
}

/// Loads an image from disk as RGBA.
pub fn load_color_image<P: AsRef<Path>>(path: P) -> PixFindResult<OwnedImage<Color>> {
    let img = image::open(path).map_err(|err| PixFindError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Converts an owned color image back into an RGBA image buffer.
pub fn to_rgba_image(img: &OwnedImage<Color>) -> PixFindResult<image::RgbaImage> {
    let width = u32::try_from(img.width()).map_err(|_| PixFindError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let height = u32::try_from(img.height()).map_err(|_| PixFindError::InvalidDimensions {
        width: img.width(),
        height: img.height(),
    })?;
    let mut raw = Vec::with_capacity(img.data().len() * 4);
    for &c in img.data() {
        raw.extend_from_slice(&<[u8; 4]>::from(c));
    }
    image::RgbaImage::from_raw(width, height, raw).ok_or(PixFindError::BufferTooSmall {
        needed: img.width() * img.height() * 4,
        got: img.data().len() * 4,
    })
}

/// Writes an owned color image to disk; the format follows the extension.
pub fn save_color_image<P: AsRef<Path>>(img: &OwnedImage<Color>, path: P) -> PixFindResult<()> {
    let rgba = to_rgba_image(img)?;
    rgba.save(path).map_err(|err| PixFindError::ImageIo {
        reason: err.to_string(),
    })
}
