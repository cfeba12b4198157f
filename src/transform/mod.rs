//! Scale-consistent image and annotation transforms.
//!
//! The image branch computes a uniform scale, resizes and normalizes the
//! image; the annotation branch rescales boxes by the realized output size
//! and mirrors them with the same flip decision as the image.
//!
//! [`SampleTransform`] chains the two branches for a single sample. The
//! individual stages are public so they can be reused or tested on their
//! own.

mod boxes;
mod flip;
mod normalize;
mod pipeline;
mod resize;
mod scale;

pub use boxes::{flip_boxes, resize_boxes};
pub use flip::{decide_flip, FlipDecision};
pub use normalize::{normalize, CHANNEL_MEAN, CHANNEL_STD, PIXEL_DIVISOR};
pub use pipeline::SampleTransform;
pub use resize::{resize_image, resized_dims};
pub use scale::compute_scale;
