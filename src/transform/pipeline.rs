//! The full per-sample transform.

use rand::Rng;
use tracing::debug;

use super::boxes::warn_on_inverted;
use super::{
    compute_scale, decide_flip, flip_boxes, normalize, resize_boxes, resize_image, FlipDecision,
};
use crate::config::TransformConfig;
use crate::error::PrepError;
use crate::sample::{BBox, ChwImage, ClassId, Original, Resized, TransformedSample};

/// Resize, normalize and randomly mirror one `(image, boxes, labels)`
/// triple, keeping the boxes aligned with the image throughout.
///
/// The struct only holds the immutable size bounds, so one instance can be
/// shared across threads; all randomness comes from the generator passed to
/// [`SampleTransform::transform`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleTransform {
    config: TransformConfig,
}

impl SampleTransform {
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Run the transform, drawing a horizontal flip with probability 0.5
    /// from `rng`. Vertical flips are never drawn.
    pub fn transform<R: Rng + ?Sized>(
        &self,
        image: &ChwImage,
        boxes: &[BBox<Original>],
        labels: &[ClassId],
        rng: &mut R,
    ) -> Result<TransformedSample, PrepError> {
        let resized = self.resize_stage(image, boxes, labels)?;
        let flip = decide_flip(true, false, rng);
        Ok(resized.finish(flip))
    }

    /// Run the transform with a fixed flip decision instead of a random draw.
    pub fn transform_with_flip(
        &self,
        image: &ChwImage,
        boxes: &[BBox<Original>],
        labels: &[ClassId],
        flip: FlipDecision,
    ) -> Result<TransformedSample, PrepError> {
        Ok(self.resize_stage(image, boxes, labels)?.finish(flip))
    }

    fn resize_stage(
        &self,
        image: &ChwImage,
        boxes: &[BBox<Original>],
        labels: &[ClassId],
    ) -> Result<ResizedStage, PrepError> {
        if boxes.len() != labels.len() {
            return Err(PrepError::LengthMismatch {
                boxes: boxes.len(),
                labels: labels.len(),
            });
        }

        let in_dims = image.dims();
        let s = compute_scale(
            in_dims.0 as f64,
            in_dims.1 as f64,
            self.config.min_size,
            self.config.max_size,
        )?;

        let image = normalize(&resize_image(image, s)?);
        let out_dims = image.dims();
        let scale = out_dims.0 as f64 / in_dims.0 as f64;

        let boxes: Vec<BBox<Resized>> = resize_boxes(boxes, in_dims, out_dims);
        warn_on_inverted(&boxes);

        debug!(
            in_height = in_dims.0,
            in_width = in_dims.1,
            out_height = out_dims.0,
            out_width = out_dims.1,
            scale,
            boxes = boxes.len(),
            "resized sample"
        );

        Ok(ResizedStage {
            image,
            boxes,
            labels: labels.to_vec(),
            scale,
        })
    }
}

/// Image and boxes after resizing and normalization, before flipping.
struct ResizedStage {
    image: ChwImage,
    boxes: Vec<BBox<Resized>>,
    labels: Vec<ClassId>,
    scale: f64,
}

impl ResizedStage {
    fn finish(self, flip: FlipDecision) -> TransformedSample {
        debug!(x_flip = flip.x_flip, y_flip = flip.y_flip, "flip decision");

        let dims = self.image.dims();
        let (image, boxes) = if flip.is_flipped() {
            (
                flip.apply_to_image(&self.image),
                flip_boxes(&self.boxes, dims, flip),
            )
        } else {
            (self.image, self.boxes)
        };

        TransformedSample {
            image,
            boxes,
            labels: self.labels,
            scale: self.scale,
        }
    }
}
