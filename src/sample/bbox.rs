//! Bounding box types in `(y_min, x_min, y_max, x_max)` order.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// An axis-aligned bounding box stored as its top-left and bottom-right
/// corners, in `(y_min, x_min, y_max, x_max)` order.
///
/// The `TSpace` parameter should be either [`Original`](super::Original) or
/// [`Resized`](super::Resized), so a box measured against the source image
/// cannot be paired with a resized image by accident.
///
/// Note: This type does NOT enforce that min <= max. Inverted boxes are
/// carried through every transform unchanged in shape; callers that care
/// can check [`BBox::is_ordered`].
#[derive(Clone, Copy, PartialEq)]
pub struct BBox<TSpace> {
    pub min: Coord<TSpace>,
    pub max: Coord<TSpace>,
}

impl<TSpace> BBox<TSpace> {
    /// Creates a new bounding box from min and max corners.
    #[inline]
    pub fn new(min: Coord<TSpace>, max: Coord<TSpace>) -> Self {
        Self { min, max }
    }

    /// Creates a new bounding box from explicit coordinates.
    #[inline]
    pub fn from_yxyx(ymin: f64, xmin: f64, ymax: f64, xmax: f64) -> Self {
        Self {
            min: Coord::new(ymin, xmin),
            max: Coord::new(ymax, xmax),
        }
    }

    /// Returns the coordinates as `[y_min, x_min, y_max, x_max]`.
    #[inline]
    pub fn to_yxyx(&self) -> [f64; 4] {
        [self.min.y, self.min.x, self.max.y, self.max.x]
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x
    }

    /// Returns the width of the bounding box.
    ///
    /// May be negative if the box is malformed (xmax < xmin).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the height of the bounding box.
    ///
    /// May be negative if the box is malformed (ymax < ymin).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns true if all coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Returns true if the box is properly ordered (min <= max for both axes).
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}

impl<TSpace> std::fmt::Debug for BBox<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BBox")
            .field("ymin", &self.min.y)
            .field("xmin", &self.min.x)
            .field("ymax", &self.max.y)
            .field("xmax", &self.max.x)
            .finish()
    }
}

impl<TSpace> Default for BBox<TSpace> {
    fn default() -> Self {
        Self::from_yxyx(0.0, 0.0, 0.0, 0.0)
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for BBox<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BBox", 4)?;
        state.serialize_field("ymin", &self.min.y)?;
        state.serialize_field("xmin", &self.min.x)?;
        state.serialize_field("ymax", &self.max.y)?;
        state.serialize_field("xmax", &self.max.x)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for BBox<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct BBoxData {
            ymin: f64,
            xmin: f64,
            ymax: f64,
            xmax: f64,
        }
        let data = BBoxData::deserialize(deserializer)?;
        Ok(BBox::from_yxyx(data.ymin, data.xmin, data.ymax, data.xmax))
    }
}
