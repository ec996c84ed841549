//! Convenience helpers for decoding images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Gray, RGB and RGBA
//! layouts are kept as-is so that full-color comparison sees every channel.

use crate::image::{ImageView, OwnedImage};
use crate::util::{PatchCmpError, PatchCmpResult};
use image::DynamicImage;
use std::path::Path;

/// Creates a borrowed view from a grayscale image buffer.
pub fn view_from_gray_image(img: &image::GrayImage) -> PatchCmpResult<ImageView<'_, u8>> {
    ImageView::from_slice(img.as_raw(), img.width() as usize, img.height() as usize)
}

/// Creates a borrowed view from an RGB image buffer.
pub fn view_from_rgb_image(img: &image::RgbImage) -> PatchCmpResult<ImageView<'_, u8>> {
    ImageView::from_interleaved(img.as_raw(), img.width() as usize, img.height() as usize, 3)
}

/// Creates an owned image from a decoded image, keeping its channel layout.
///
/// 16-bit and float images are narrowed to 8 bits. Two-channel gray+alpha
/// images drop their alpha.
pub fn owned_from_dynamic_image(img: &DynamicImage) -> PatchCmpResult<OwnedImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    match img {
        DynamicImage::ImageLuma8(gray) => OwnedImage::gray(gray.as_raw().clone(), width, height),
        DynamicImage::ImageRgb8(rgb) => OwnedImage::new(rgb.as_raw().clone(), width, height, 3),
        DynamicImage::ImageRgba8(rgba) => OwnedImage::new(rgba.as_raw().clone(), width, height, 4),
        other => {
            let color = other.color();
            if !color.has_color() {
                OwnedImage::gray(other.to_luma8().into_raw(), width, height)
            } else if color.has_alpha() {
                OwnedImage::new(other.to_rgba8().into_raw(), width, height, 4)
            } else {
                OwnedImage::new(other.to_rgb8().into_raw(), width, height, 3)
            }
        }
    }
}

/// Decodes an image file into an owned buffer.
pub fn load_image<P: AsRef<Path>>(path: P) -> PatchCmpResult<OwnedImage> {
    let img = image::open(path).map_err(|err| PatchCmpError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

#[cfg(test)]
mod tests {
    use super::owned_from_dynamic_image;
    use image::{DynamicImage, GrayAlphaImage, LumaA, Rgb, RgbImage};

    #[test]
    fn rgb_layout_is_preserved() {
        let img = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        let owned = owned_from_dynamic_image(&DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!(owned.channels(), 3);
        assert_eq!(&owned.data()[..3], &[1, 2, 3]);
    }

    #[test]
    fn gray_alpha_becomes_gray() {
        let img = GrayAlphaImage::from_pixel(2, 2, LumaA([40, 7]));
        let owned = owned_from_dynamic_image(&DynamicImage::ImageLumaA8(img)).unwrap();
        assert_eq!(owned.channels(), 1);
        assert_eq!(owned.data(), &[40, 40, 40, 40]);
    }
}
