//! Bounding-box re-projection.

use tracing::warn;

use super::FlipDecision;
use crate::sample::{BBox, Coord};

/// Rescale boxes from an `in_dims` image onto an `out_dims` image, both given
/// as `(height, width)`.
///
/// Each axis uses its own ratio, so this stays correct even if the two axes
/// were resized by different factors. Box count and order are preserved.
pub fn resize_boxes<TFrom, TTo>(
    boxes: &[BBox<TFrom>],
    in_dims: (usize, usize),
    out_dims: (usize, usize),
) -> Vec<BBox<TTo>> {
    let y_ratio = out_dims.0 as f64 / in_dims.0 as f64;
    let x_ratio = out_dims.1 as f64 / in_dims.1 as f64;

    boxes
        .iter()
        .map(|bbox| {
            BBox::new(
                bbox.min.scaled(y_ratio, x_ratio),
                bbox.max.scaled(y_ratio, x_ratio),
            )
        })
        .collect()
}

/// Mirror boxes to match a flipped `(height, width)` image.
///
/// A horizontal flip maps `x_min, x_max` to `W - x_max, W - x_min`, which
/// keeps `x_min <= x_max` for ordered boxes; a vertical flip does the same on
/// the y-axis. Box count and order are preserved.
pub fn flip_boxes<TSpace>(
    boxes: &[BBox<TSpace>],
    dims: (usize, usize),
    flip: FlipDecision,
) -> Vec<BBox<TSpace>> {
    let (height, width) = (dims.0 as f64, dims.1 as f64);

    boxes
        .iter()
        .map(|bbox| {
            let (ymin, ymax) = if flip.y_flip {
                (height - bbox.max.y, height - bbox.min.y)
            } else {
                (bbox.min.y, bbox.max.y)
            };
            let (xmin, xmax) = if flip.x_flip {
                (width - bbox.max.x, width - bbox.min.x)
            } else {
                (bbox.min.x, bbox.max.x)
            };
            BBox::new(Coord::new(ymin, xmin), Coord::new(ymax, xmax))
        })
        .collect()
}

/// Log boxes whose corners are inverted. They are not altered.
pub(crate) fn warn_on_inverted<TSpace>(boxes: &[BBox<TSpace>]) {
    for (index, bbox) in boxes.iter().enumerate() {
        if !bbox.is_ordered() {
            warn!(index, ?bbox, "inverted box passed through transform");
        }
    }
}
