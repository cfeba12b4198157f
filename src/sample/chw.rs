//! Channel-first float images.

use image::RgbImage;
use ndarray::{s, Array3, ArrayView3, Axis};

use crate::error::PrepError;

/// Number of channels every image carries (red, green, blue).
pub const CHANNELS: usize = 3;

/// A 3-channel image stored as a `[channel, height, width]` float array.
///
/// Channel order is red, green, blue. Raw images coming from a sample
/// provider hold values in `[0, 255]`; the same type also carries normalized
/// images after the transform pipeline has run.
#[derive(Clone, Debug, PartialEq)]
pub struct ChwImage {
    data: Array3<f32>,
}

impl ChwImage {
    /// Wraps a CHW array, checking that it has exactly 3 channels and a
    /// non-empty spatial extent.
    pub fn new(data: Array3<f32>) -> Result<Self, PrepError> {
        let (channels, height, width) = data.dim();
        if channels != CHANNELS {
            return Err(PrepError::InvalidChannels { channels });
        }
        if height == 0 || width == 0 {
            return Err(PrepError::InvalidDimensions {
                height: height as f64,
                width: width as f64,
            });
        }
        Ok(Self { data })
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(height: usize, width: usize, value: f32) -> Result<Self, PrepError> {
        Self::new(Array3::from_elem((CHANNELS, height, width), value))
    }

    /// Creates an all-zero image.
    pub fn zeros(height: usize, width: usize) -> Result<Self, PrepError> {
        Self::filled(height, width, 0.0)
    }

    /// Converts an 8-bit interleaved RGB image into CHW floats in `[0, 255]`.
    pub fn from_rgb8(rgb: &RgbImage) -> Result<Self, PrepError> {
        let (width, height) = rgb.dimensions();
        let mut data = Array3::<f32>::zeros((CHANNELS, height as usize, width as usize));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            let (x, y) = (x as usize, y as usize);
            for c in 0..CHANNELS {
                data[[c, y, x]] = pixel[c] as f32;
            }
        }
        Self::new(data)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.data.dim().1
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.dim().2
    }

    /// Returns `(height, width)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    #[inline]
    pub fn view(&self) -> ArrayView3<'_, f32> {
        self.data.view()
    }

    #[inline]
    pub fn into_array(self) -> Array3<f32> {
        self.data
    }

    /// Returns a copy mirrored left-to-right.
    pub fn flip_horizontal(&self) -> Self {
        Self {
            data: self.data.slice(s![.., .., ..;-1]).to_owned(),
        }
    }

    /// Returns a copy mirrored top-to-bottom.
    pub fn flip_vertical(&self) -> Self {
        Self {
            data: self.data.slice(s![.., ..;-1, ..]).to_owned(),
        }
    }

    /// Mean sample value of each channel.
    pub fn channel_means(&self) -> [f64; CHANNELS] {
        let mut means = [0.0; CHANNELS];
        for (c, plane) in self.data.axis_iter(Axis(0)).enumerate() {
            let sum: f64 = plane.iter().map(|&v| v as f64).sum();
            means[c] = sum / plane.len() as f64;
        }
        means
    }

    pub(crate) fn from_array_unchecked(data: Array3<f32>) -> Self {
        debug_assert_eq!(data.dim().0, CHANNELS);
        Self { data }
    }
}
