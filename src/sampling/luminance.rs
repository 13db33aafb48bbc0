//! Single-channel source frames and bounds-checked pixel lookup

use crate::io::error::{RenderError, Result};
use ndarray::Array2;
use num_traits::{ToPrimitive, clamp};
use std::path::Path;

/// What to do with a sample that maps outside the source frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Read the nearest edge pixel
    #[default]
    Clamp,
    /// Fail the frame
    Strict,
}

/// 8-bit luminance raster indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceFrame {
    pixels: Array2<u8>,
}

impl LuminanceFrame {
    /// Load an image from disk and convert it to 8-bit luminance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file at the given path cannot be opened or read
    /// - The file is not a decodable image
    /// - The image has no pixels
    pub fn from_png_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img = image::open(&path_buf).map_err(|e| RenderError::ImageLoad {
            path: path_buf,
            source: e,
        })?;
        Self::from_luma(&img.to_luma8())
    }

    /// Copy an in-memory grayscale image
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels
    pub fn from_luma(img: &image::GrayImage) -> Result<Self> {
        let (width, height) = (img.width() as usize, img.height() as usize);
        let mut pixels = Array2::zeros((height, width));
        for (x, y, pixel) in img.enumerate_pixels() {
            if let Some(value) = pixels.get_mut((y as usize, x as usize)) {
                *value = pixel.0[0];
            }
        }
        Self::from_array(pixels)
    }

    /// Wrap a luminance array indexed `[row, col]`
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no pixels
    pub fn from_array(pixels: Array2<u8>) -> Result<Self> {
        if pixels.is_empty() {
            return Err(RenderError::InvalidSourceData {
                reason: format!("source frame is empty ({:?})", pixels.dim()),
            });
        }
        Ok(Self { pixels })
    }

    /// Frame of a single luminance value
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn uniform(width: usize, height: usize, value: u8) -> Result<Self> {
        Self::from_array(Array2::from_elem((height, width), value))
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Luminance at integer pixel coordinates, if inside the frame
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.pixels.get((y, x)).copied()
    }

    /// Luminance of the pixel containing the fractional coordinates `(x, y)`
    ///
    /// Coordinates are floored to the pixel whose top-left corner they fall
    /// in; out-of-range coordinates are handled according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either coordinate is not finite
    /// - The pixel lies outside the frame under [`BoundsPolicy::Strict`]
    pub fn sample(&self, x: f64, y: f64, policy: BoundsPolicy) -> Result<u8> {
        let out_of_bounds = || RenderError::SampleOutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        };

        if !x.is_finite() || !y.is_finite() {
            return Err(out_of_bounds());
        }

        let column = pixel_index(x, self.width(), policy).ok_or_else(out_of_bounds)?;
        let row = pixel_index(y, self.height(), policy).ok_or_else(out_of_bounds)?;
        self.get(column, row).ok_or_else(out_of_bounds)
    }
}

/// Floor a coordinate onto `0..len`, clamping or rejecting per `policy`
fn pixel_index(coordinate: f64, len: usize, policy: BoundsPolicy) -> Option<usize> {
    let floored = coordinate.floor();
    match policy {
        BoundsPolicy::Clamp => {
            let last = len.checked_sub(1)? as f64;
            clamp(floored, 0.0, last).to_usize()
        }
        BoundsPolicy::Strict => floored.to_usize().filter(|&index| index < len),
    }
}
