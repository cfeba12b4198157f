//! Random flip decisions.

use rand::Rng;
use serde::Serialize;

use crate::sample::ChwImage;

/// Which axes were mirrored for one sample.
///
/// The same decision is applied to the image (via
/// [`FlipDecision::apply_to_image`]) and to its boxes (via
/// [`flip_boxes`](super::flip_boxes)) so the two stay aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FlipDecision {
    /// Mirror left-to-right.
    pub x_flip: bool,
    /// Mirror top-to-bottom.
    pub y_flip: bool,
}

impl FlipDecision {
    /// No mirroring on either axis.
    pub const NONE: Self = Self {
        x_flip: false,
        y_flip: false,
    };

    /// Mirror left-to-right only.
    pub const HORIZONTAL: Self = Self {
        x_flip: true,
        y_flip: false,
    };

    /// Returns true if either axis is mirrored.
    pub fn is_flipped(&self) -> bool {
        self.x_flip || self.y_flip
    }

    /// Mirror `image` to match this decision, returning a new image.
    pub fn apply_to_image(&self, image: &ChwImage) -> ChwImage {
        match (self.x_flip, self.y_flip) {
            (false, false) => image.clone(),
            (true, false) => image.flip_horizontal(),
            (false, true) => image.flip_vertical(),
            (true, true) => image.flip_horizontal().flip_vertical(),
        }
    }
}

/// Draw a flip decision. Each enabled axis is mirrored with probability 0.5;
/// a disabled axis is never mirrored and consumes no randomness.
pub fn decide_flip<R: Rng + ?Sized>(x_random: bool, y_random: bool, rng: &mut R) -> FlipDecision {
    let x_flip = x_random && rng.random_bool(0.5);
    let y_flip = y_random && rng.random_bool(0.5);
    FlipDecision { x_flip, y_flip }
}
