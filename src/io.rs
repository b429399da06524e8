//! `image` crate integration for the batch driver.
//!
//! - [`PixelGrid`] for any `ImageBuffer` with `u8` subpixels
//! - [`load_image`] / [`save_image`]: decode as stored and write back out
//! - [`apply_to_image`]: run a filter on a decoded image without converting it
//! - [`output_path`]: `<out>/<family>/<name>.<ext>`

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, Pixel};

use crate::engine::{apply, PixelGrid};
use crate::error::{FilterError, FilterResult};
use crate::filters::PixelFilter;

impl<P> PixelGrid for ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn channels(&self) -> usize {
        P::CHANNEL_COUNT as usize
    }

    fn read_pixel(&self, x: usize, y: usize, color: &mut Vec<u8>) {
        color.clear();
        color.extend_from_slice(self.get_pixel(x as u32, y as u32).channels());
    }

    fn write_pixel(&mut self, x: usize, y: usize, color: &[u8]) -> FilterResult<()> {
        let expected = P::CHANNEL_COUNT as usize;
        if color.len() != expected {
            return Err(FilterError::ArityMismatch {
                expected,
                found: color.len(),
            });
        }
        self.get_pixel_mut(x as u32, y as u32)
            .channels_mut()
            .copy_from_slice(color);
        Ok(())
    }
}

/// Decode an image from disk, keeping its stored color type.
pub fn load_image(path: &Path) -> image::ImageResult<DynamicImage> {
    image::open(path)
}

/// Write an image, creating the parent directory if needed.
pub fn save_image(image: &DynamicImage, path: &Path) -> image::ImageResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    image.save(path)
}

/// Apply a filter to a decoded image in its stored color type.
///
/// 8-bit buffers go to the engine untouched: RGB succeeds, gray fails with
/// [`FilterError::ChannelOutOfRange`] and alpha formats with
/// [`FilterError::ArityMismatch`]. Other bit depths are rejected.
pub fn apply_to_image(image: &mut DynamicImage, filter: &PixelFilter) -> FilterResult<()> {
    match image {
        DynamicImage::ImageRgb8(buffer) => apply(buffer, filter.func),
        DynamicImage::ImageRgba8(buffer) => apply(buffer, filter.func),
        DynamicImage::ImageLuma8(buffer) => apply(buffer, filter.func),
        DynamicImage::ImageLumaA8(buffer) => apply(buffer, filter.func),
        other => Err(FilterError::UnsupportedFormat(format!("{:?}", other.color()))),
    }
}

/// Output location for one filter's result.
pub fn output_path(out_dir: &Path, filter: &PixelFilter, extension: &str) -> PathBuf {
    out_dir
        .join(filter.family.as_str())
        .join(filter.name)
        .with_extension(extension)
}
