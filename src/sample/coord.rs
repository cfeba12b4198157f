//! Typed coordinate values using PhantomData for compile-time safety.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// A 2D point with a type-level marker for the coordinate space.
///
/// Fields are stored row-first (`y`, then `x`) to match the box layout used
/// throughout the crate.
#[derive(Clone, Copy, PartialEq)]
pub struct Coord<TSpace> {
    pub y: f64,
    pub x: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Coord<TSpace> {
    /// Creates a new coordinate from a row (`y`) and a column (`x`).
    #[inline]
    pub fn new(y: f64, x: f64) -> Self {
        Self {
            y,
            x,
            _space: PhantomData,
        }
    }

    /// Returns true if both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.y.is_finite() && self.x.is_finite()
    }

    /// Re-tags the point with another coordinate space after scaling each axis.
    #[inline]
    pub(crate) fn scaled<TOther>(&self, y_ratio: f64, x_ratio: f64) -> Coord<TOther> {
        Coord::new(self.y * y_ratio, self.x * x_ratio)
    }
}

impl<TSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coord")
            .field("y", &self.y)
            .field("x", &self.x)
            .finish()
    }
}

impl<TSpace> Default for Coord<TSpace> {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for Coord<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Coord", 2)?;
        state.serialize_field("y", &self.y)?;
        state.serialize_field("x", &self.x)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Coord<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct CoordData {
            y: f64,
            x: f64,
        }
        let data = CoordData::deserialize(deserializer)?;
        Ok(Coord::new(data.y, data.x))
    }
}
