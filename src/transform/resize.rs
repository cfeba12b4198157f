//! Anti-aliased bilinear resizing with mirrored borders.
//!
//! Output pixel centres are mapped back onto the source grid and sampled
//! bilinearly. When an axis shrinks, that axis is first smoothed with a
//! Gaussian whose width grows with the shrink factor, so downscaling does
//! not alias. Samples that fall outside the source are mirrored back in
//! (`d c b | a b c d | c b a`), which keeps edges from darkening.

use ndarray::{Array3, ArrayView1, ArrayView3, ArrayViewMut1, Axis, Zip};

use crate::error::PrepError;
use crate::sample::{ChwImage, CHANNELS};

/// Gaussian kernels are cut off at this many standard deviations.
const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// Output `(height, width)` for an image resized by `scale`.
///
/// Each edge is rounded to the nearest pixel, halves to even, and never
/// drops below one.
pub fn resized_dims(height: usize, width: usize, scale: f64) -> (usize, usize) {
    let edge = |len: usize| ((len as f64 * scale).round_ties_even() as usize).max(1);
    (edge(height), edge(width))
}

/// Resize `image` uniformly by `scale`, returning a new image of
/// [`resized_dims`] size. The input is left untouched.
pub fn resize_image(image: &ChwImage, scale: f64) -> Result<ChwImage, PrepError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PrepError::InvalidScale { scale });
    }

    let (height, width) = image.dims();
    let (out_height, out_width) = resized_dims(height, width, scale);
    let factor_y = height as f64 / out_height as f64;
    let factor_x = width as f64 / out_width as f64;

    let smoothed = anti_alias(image.view(), factor_y, factor_x);
    let src = match &smoothed {
        Some(data) => data.view(),
        None => image.view(),
    };

    let rows = linear_taps(height, out_height, factor_y);
    let cols = linear_taps(width, out_width, factor_x);

    let mut out = Array3::<f32>::zeros((CHANNELS, out_height, out_width));
    for c in 0..CHANNELS {
        for (oy, row) in rows.iter().enumerate() {
            for (ox, col) in cols.iter().enumerate() {
                let top = col.blend(src[[c, row.lo, col.lo]], src[[c, row.lo, col.hi]]);
                let bottom = col.blend(src[[c, row.hi, col.lo]], src[[c, row.hi, col.hi]]);
                out[[c, oy, ox]] = (top * (1.0 - row.frac) + bottom * row.frac) as f32;
            }
        }
    }

    Ok(ChwImage::from_array_unchecked(out))
}

/// Source neighbours and blend weight for one output position on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tap {
    lo: usize,
    hi: usize,
    frac: f64,
}

impl Tap {
    #[inline]
    fn blend(&self, lo: f32, hi: f32) -> f64 {
        lo as f64 * (1.0 - self.frac) + hi as f64 * self.frac
    }
}

fn linear_taps(len_in: usize, len_out: usize, factor: f64) -> Vec<Tap> {
    (0..len_out)
        .map(|o| {
            let pos = (o as f64 + 0.5) * factor - 0.5;
            let base = pos.floor();
            let base_index = base as isize;
            Tap {
                lo: mirror_index(base_index, len_in),
                hi: mirror_index(base_index + 1, len_in),
                frac: pos - base,
            }
        })
        .collect()
}

/// Map any integer index onto `0..len` by mirroring about the end samples
/// without repeating them.
fn mirror_index(index: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let wrapped = index.rem_euclid(period);
    if wrapped >= len as isize {
        (period - wrapped) as usize
    } else {
        wrapped as usize
    }
}

fn anti_alias(src: ArrayView3<'_, f32>, factor_y: f64, factor_x: f64) -> Option<Array3<f32>> {
    let sigma_y = ((factor_y - 1.0) / 2.0).max(0.0);
    let sigma_x = ((factor_x - 1.0) / 2.0).max(0.0);
    if sigma_y == 0.0 && sigma_x == 0.0 {
        return None;
    }

    let mut data = src.to_owned();
    if sigma_y > 0.0 {
        data = blur_axis(data.view(), Axis(1), sigma_y);
    }
    if sigma_x > 0.0 {
        data = blur_axis(data.view(), Axis(2), sigma_x);
    }
    Some(data)
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (GAUSSIAN_TRUNCATE * sigma + 0.5) as usize;
    let weights: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let d = i as f64 - radius as f64;
            (-0.5 * d * d / (sigma * sigma)).exp()
        })
        .collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

fn blur_axis(src: ArrayView3<'_, f32>, axis: Axis, sigma: f64) -> Array3<f32> {
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;

    let mut out = Array3::<f32>::zeros(src.raw_dim());
    Zip::from(out.lanes_mut(axis))
        .and(src.lanes(axis))
        .for_each(|dst, line| convolve_line(dst, line, &kernel, radius));
    out
}

fn convolve_line(
    mut dst: ArrayViewMut1<'_, f32>,
    line: ArrayView1<'_, f32>,
    kernel: &[f64],
    radius: isize,
) {
    let len = line.len();
    for i in 0..len {
        let acc: f64 = kernel
            .iter()
            .enumerate()
            .map(|(k, w)| {
                let j = mirror_index(i as isize + k as isize - radius, len);
                w * line[j] as f64
            })
            .sum();
        dst[i] = acc as f32;
    }
}
