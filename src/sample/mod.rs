//! Data model for detection samples.
//!
//! This module defines the values that flow through the preprocessing
//! pipeline: channel-first images, bounding boxes, class identifiers and the
//! per-sample containers that bundle them.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: Boxes carry a marker for the image they are measured
//!    against ([`Original`] or [`Resized`]), so a resized image cannot be
//!    paired with un-rescaled boxes by accident.
//!
//! 2. **Canonical Layout**: Boxes are always `(y_min, x_min, y_max, x_max)`
//!    in pixels and images are always CHW with RGB channel order.
//!
//! 3. **Permissive Construction**: Boxes may be inverted or non-finite; the
//!    pipeline carries them through rather than rejecting them.
//!
//! # Example
//!
//! ```
//! use detprep::sample::{BBox, ChwImage, ClassId, Original, Sample};
//!
//! let sample = Sample::new(
//!     ChwImage::zeros(480, 640).unwrap(),
//!     vec![BBox::<Original>::from_yxyx(10.0, 20.0, 200.0, 100.0)],
//!     vec![ClassId::new(14)],
//! );
//! assert_eq!(sample.image.dims(), (480, 640));
//! ```

mod bbox;
mod chw;
mod coord;
mod ids;
mod model;
mod space;

// Re-export core types for convenient access
pub use bbox::BBox;
pub use chw::{ChwImage, CHANNELS};
pub use coord::Coord;
pub use ids::ClassId;
pub use model::{ImageDims, Sample, TransformedSample};
pub use space::{Original, Resized};
