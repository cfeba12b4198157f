//! Pixel intensity normalization.

use ndarray::Axis;

use crate::sample::{ChwImage, CHANNELS};

/// Raw intensities are divided by this before mean/std normalization.
///
/// 256 rather than 255: the `[0, 255]` input range lands in `[0, 1)`.
pub const PIXEL_DIVISOR: f32 = 256.0;

/// Per-channel mean in RGB order.
pub const CHANNEL_MEAN: [f32; CHANNELS] = [0.485, 0.456, 0.406];

/// Per-channel standard deviation in RGB order.
pub const CHANNEL_STD: [f32; CHANNELS] = [0.229, 0.224, 0.225];

/// Rescale intensities by [`PIXEL_DIVISOR`], then apply per-channel
/// `(v - mean) / std` with the fixed reference statistics.
pub fn normalize(image: &ChwImage) -> ChwImage {
    let mut data = image.view().to_owned();
    for (c, mut plane) in data.axis_iter_mut(Axis(0)).enumerate() {
        let (mean, std) = (CHANNEL_MEAN[c], CHANNEL_STD[c]);
        plane.mapv_inplace(|v| (v / PIXEL_DIVISOR - mean) / std);
    }
    ChwImage::from_array_unchecked(data)
}
