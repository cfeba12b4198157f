//! Coordinate space marker types.
//!
//! These are zero-sized types (ZSTs) used as type parameters to distinguish
//! boxes measured against the source image from boxes measured against the
//! resized image at compile time.

use std::fmt;

/// Marker type for pixel coordinates relative to the original image.
///
/// This is the space a sample provider hands boxes over in, before any
/// resizing has happened.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Original {}

/// Marker type for pixel coordinates relative to the resized image.
///
/// Boxes returned from the transform pipeline live in this space, so they
/// line up with the pixels of the returned image.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resized {}

impl fmt::Debug for Original {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Original has no variants
    }
}

impl fmt::Debug for Resized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {} // This is unreachable since Resized has no variants
    }
}
