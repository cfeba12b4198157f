//! Resize scale selection.

use crate::error::PrepError;

/// Pick a single resize factor for an `height × width` image.
///
/// The shorter edge is scaled toward `min_size` unless that would push the
/// longer edge past `max_size`, in which case the longer-edge constraint
/// wins: `min(min_size / min(H, W), max_size / max(H, W))`.
///
/// Zero, negative or non-finite dimensions are rejected with
/// [`PrepError::InvalidDimensions`]. The size bounds are taken as given.
pub fn compute_scale(
    height: f64,
    width: f64,
    min_size: f64,
    max_size: f64,
) -> Result<f64, PrepError> {
    if !(height.is_finite() && width.is_finite() && height > 0.0 && width > 0.0) {
        return Err(PrepError::InvalidDimensions { height, width });
    }

    let shorter_edge_scale = min_size / height.min(width);
    let longer_edge_scale = max_size / height.max(width);
    Ok(shorter_edge_scale.min(longer_edge_scale))
}
