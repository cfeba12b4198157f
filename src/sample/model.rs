//! Per-sample containers handed into and out of the transform pipeline.

use serde::Serialize;

use super::{BBox, ChwImage, ClassId, Original, Resized};

/// One raw example as produced by a sample provider.
///
/// `boxes`, `labels` and `difficult` are index-aligned: entry `i` of each
/// describes the same object.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// CHW RGB image with values in `[0, 255]`.
    pub image: ChwImage,
    /// Boxes in original-image pixel coordinates.
    pub boxes: Vec<BBox<Original>>,
    /// Class identifier per box.
    pub labels: Vec<ClassId>,
    /// Dataset metadata; never consumed by the transform.
    pub difficult: Vec<bool>,
}

impl Sample {
    /// Creates a sample with every object marked as not difficult.
    pub fn new(image: ChwImage, boxes: Vec<BBox<Original>>, labels: Vec<ClassId>) -> Self {
        let difficult = vec![false; boxes.len()];
        Self {
            image,
            boxes,
            labels,
            difficult,
        }
    }
}

/// The output of one transform call: resized and normalized image, boxes
/// re-projected onto it, labels passed through, and the realized scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformedSample {
    pub image: ChwImage,
    pub boxes: Vec<BBox<Resized>>,
    pub labels: Vec<ClassId>,
    /// Resized height divided by original height.
    pub scale: f64,
}

/// Height and width of an image, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImageDims {
    pub height: usize,
    pub width: usize,
}

impl From<(usize, usize)> for ImageDims {
    fn from((height, width): (usize, usize)) -> Self {
        Self { height, width }
    }
}
