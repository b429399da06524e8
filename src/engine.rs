//! Pixel transform engine.
//!
//! Visits every coordinate of an image exactly once, row by row, and
//! replaces the pixel with the output of a per-pixel filter. The image is
//! mutated in place; no new image is allocated.
//!
//! ## Image Layout
//!
//! The engine works on anything implementing [`PixelGrid`]. For `ndarray`
//! images the shape is `(height, width, channels)`, matching the rest of the
//! crate.
//!
//! ## Failure
//!
//! The engine does not validate channel counts up front. A filter that reads
//! past the end of a pixel fails on the first pixel it sees, and a filter
//! whose output arity differs from the image's fails on the first write.
//! Either error stops the scan; pixels already written stay written.

use ndarray::{s, Array3, ArrayView3};
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::filters::{find_filter, Rgb};

/// Read/write access to a 2-D grid of pixels.
pub trait PixelGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Channels per pixel.
    fn channels(&self) -> usize;

    /// Copy the pixel at `(x, y)` into `color`, replacing its contents.
    fn read_pixel(&self, x: usize, y: usize, color: &mut Vec<u8>);

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// Fails with [`FilterError::ArityMismatch`] when `color` does not have
    /// exactly [`PixelGrid::channels`] entries.
    fn write_pixel(&mut self, x: usize, y: usize, color: &[u8]) -> FilterResult<()>;
}

impl PixelGrid for Array3<u8> {
    fn width(&self) -> usize {
        self.dim().1
    }

    fn height(&self) -> usize {
        self.dim().0
    }

    fn channels(&self) -> usize {
        self.dim().2
    }

    fn read_pixel(&self, x: usize, y: usize, color: &mut Vec<u8>) {
        color.clear();
        color.extend(self.slice(s![y, x, ..]).iter().copied());
    }

    fn write_pixel(&mut self, x: usize, y: usize, color: &[u8]) -> FilterResult<()> {
        let channels = self.dim().2;
        if color.len() != channels {
            return Err(FilterError::ArityMismatch {
                expected: channels,
                found: color.len(),
            });
        }
        for (dst, &src) in self.slice_mut(s![y, x, ..]).iter_mut().zip(color) {
            *dst = src;
        }
        Ok(())
    }
}

/// Apply a per-pixel filter to every pixel of `image`, in place.
///
/// Rows are visited top to bottom, pixels left to right. Zero-sized images
/// are a no-op and never call `filter`.
pub fn apply<G, F>(image: &mut G, filter: F) -> FilterResult<()>
where
    G: PixelGrid + ?Sized,
    F: Fn(&[u8]) -> FilterResult<Rgb>,
{
    let (width, height) = (image.width(), image.height());
    debug!(width, height, channels = image.channels(), "applying pixel filter");

    let mut color = Vec::with_capacity(image.channels());
    for y in 0..height {
        for x in 0..width {
            image.read_pixel(x, y, &mut color);
            let out = filter(&color)?;
            image.write_pixel(x, y, &out)?;
        }
    }
    Ok(())
}

/// Look up a catalog filter by name and apply it in place.
pub fn apply_named<G>(image: &mut G, name: &str) -> FilterResult<()>
where
    G: PixelGrid + ?Sized,
{
    let filter = find_filter(name)?;
    debug!(filter = filter.name, family = %filter.family, "selected filter");
    apply(image, filter.func)
}

/// Apply a filter to a copy of `input` and return the copy.
pub fn filtered<F>(input: ArrayView3<u8>, filter: F) -> FilterResult<Array3<u8>>
where
    F: Fn(&[u8]) -> FilterResult<Rgb>,
{
    let mut output = input.to_owned();
    apply(&mut output, filter)?;
    Ok(output)
}

/// Apply a named filter to a flat interleaved buffer.
///
/// `data` holds `height * width * channels` bytes in row-major order.
pub fn filter_buffer(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    name: &str,
) -> FilterResult<Vec<u8>> {
    let mut image = Array3::from_shape_vec((height, width, channels), data.to_vec()).map_err(|_| {
        FilterError::InvalidDimensions(format!(
            "{} bytes for {}x{}x{} image",
            data.len(),
            width,
            height,
            channels
        ))
    })?;
    apply_named(&mut image, name)?;
    Ok(image.into_raw_vec_and_offset().0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{all_filters, simple};
    use std::cell::{Cell, RefCell};

    fn gradient(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, c)| {
            (y * 37 + x * 11 + c * 53) as u8
        })
    }

    /// Grid that records every access.
    struct RecordingGrid {
        inner: Array3<u8>,
        reads: RefCell<Vec<(usize, usize)>>,
        writes: Vec<(usize, usize)>,
    }

    impl PixelGrid for RecordingGrid {
        fn width(&self) -> usize {
            self.inner.width()
        }
        fn height(&self) -> usize {
            self.inner.height()
        }
        fn channels(&self) -> usize {
            self.inner.channels()
        }
        fn read_pixel(&self, x: usize, y: usize, color: &mut Vec<u8>) {
            self.reads.borrow_mut().push((x, y));
            self.inner.read_pixel(x, y, color);
        }
        fn write_pixel(&mut self, x: usize, y: usize, color: &[u8]) -> FilterResult<()> {
            self.writes.push((x, y));
            self.inner.write_pixel(x, y, color)
        }
    }

    // ========================================================================
    // Coverage
    // ========================================================================

    #[test]
    fn test_apply_matches_per_pixel_filter() {
        let original = gradient(5, 7);
        for filter in all_filters() {
            let mut image = original.clone();
            apply(&mut image, filter.func).unwrap();
            for y in 0..5 {
                for x in 0..7 {
                    let before = [original[[y, x, 0]], original[[y, x, 1]], original[[y, x, 2]]];
                    let expected = filter.apply_to(&before).unwrap();
                    let after = [image[[y, x, 0]], image[[y, x, 1]], image[[y, x, 2]]];
                    assert_eq!(after, expected, "{} at ({}, {})", filter.name, x, y);
                }
            }
        }
    }

    #[test]
    fn test_apply_visits_each_pixel_once_row_major() {
        let mut grid = RecordingGrid {
            inner: gradient(3, 4),
            reads: RefCell::new(Vec::new()),
            writes: Vec::new(),
        };
        let calls = Cell::new(0usize);
        apply(&mut grid, |color| {
            calls.set(calls.get() + 1);
            simple::negative(color)
        })
        .unwrap();

        let expected: Vec<(usize, usize)> =
            (0..3).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        assert_eq!(calls.get(), 12);
        assert_eq!(*grid.reads.borrow(), expected);
        assert_eq!(grid.writes, expected);
    }

    #[test]
    fn test_apply_zero_sized_is_noop() {
        for (h, w) in [(0, 0), (0, 5), (5, 0)] {
            let mut image = Array3::<u8>::zeros((h, w, 3));
            let calls = Cell::new(0usize);
            apply(&mut image, |color| {
                calls.set(calls.get() + 1);
                simple::negative(color)
            })
            .unwrap();
            assert_eq!(calls.get(), 0);
            assert_eq!(image.dim(), (h, w, 3));
        }
    }

    #[test]
    fn test_zero_sized_with_too_few_channels_is_noop() {
        let mut image = Array3::<u8>::zeros((0, 4, 1));
        apply_named(&mut image, "negative").unwrap();
    }

    #[test]
    fn test_apply_named() {
        let mut image = Array3::from_shape_vec((1, 1, 3), vec![10, 20, 30]).unwrap();
        apply_named(&mut image, "color_shift").unwrap();
        assert_eq!(image.into_raw_vec_and_offset().0, vec![30, 10, 20]);
    }

    #[test]
    fn test_apply_named_unknown() {
        let mut image = gradient(2, 2);
        let before = image.clone();
        assert_eq!(
            apply_named(&mut image, "vintage").unwrap_err(),
            FilterError::UnknownFilter("vintage".to_string())
        );
        assert_eq!(image, before);
    }

    // ========================================================================
    // Failures
    // ========================================================================

    #[test]
    fn test_two_channel_image_fails_out_of_range() {
        let mut image = Array3::<u8>::zeros((2, 2, 2));
        assert_eq!(
            apply_named(&mut image, "average").unwrap_err(),
            FilterError::ChannelOutOfRange { index: 2, channels: 2 }
        );
    }

    #[test]
    fn test_rgba_image_fails_arity_mismatch() {
        let mut image = Array3::<u8>::from_elem((2, 2, 4), 9);
        assert_eq!(
            apply_named(&mut image, "negative").unwrap_err(),
            FilterError::ArityMismatch { expected: 4, found: 3 }
        );
        // Nothing was written, alpha included
        assert!(image.iter().all(|&v| v == 9));
    }

    #[test]
    fn test_failure_keeps_earlier_writes() {
        let mut image = Array3::<u8>::zeros((2, 2, 3));
        image[[1, 0, 0]] = 99;
        let result = apply(&mut image, |color| {
            if color[0] == 99 {
                Err(FilterError::ChannelOutOfRange { index: 3, channels: 3 })
            } else {
                simple::negative(color)
            }
        });
        assert!(result.is_err());
        // Row 0 was finished before the failing pixel at (0, 1)
        assert_eq!(image[[0, 0, 0]], 255);
        assert_eq!(image[[0, 1, 0]], 255);
        assert_eq!(image[[1, 0, 0]], 99);
        assert_eq!(image[[1, 1, 0]], 0);
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    #[test]
    fn test_filtered_leaves_input_untouched() {
        let input = gradient(3, 3);
        let output = filtered(input.view(), simple::negative).unwrap();
        assert_eq!(output[[1, 2, 0]], 255 - input[[1, 2, 0]]);
        assert_eq!(input, gradient(3, 3));
    }

    #[test]
    fn test_filter_buffer() {
        let out = filter_buffer(&[10, 20, 30, 200, 200, 200], 2, 1, 3, "negative").unwrap();
        assert_eq!(out, vec![245, 235, 225, 55, 55, 55]);
    }

    #[test]
    fn test_filter_buffer_bad_length() {
        let err = filter_buffer(&[1, 2, 3, 4], 2, 1, 3, "negative").unwrap_err();
        assert!(matches!(err, FilterError::InvalidDimensions(_)));
    }
}
