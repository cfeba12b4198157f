#![allow(dead_code)]

use detprep::sample::{BBox, ClassId, Original};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Relative slack for scale-bound comparisons.
pub const EPS_SCALE: f64 = 1e-9;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// `(min_size, max_size)` with `min_size < max_size`.
pub fn arb_size_bounds() -> BoxedStrategy<(f64, f64)> {
    (16u32..=1024, 1u32..=1024)
        .prop_map(|(min, extra)| (min as f64, (min + extra) as f64))
        .boxed()
}

/// A coordinate on a quarter-pixel grid inside `0..=limit`.
///
/// Quarter-pixel values keep `limit - (limit - v)` exact in f64.
fn arb_quarter_coord(limit: usize) -> BoxedStrategy<f64> {
    (0u32..=(limit as u32) * 4)
        .prop_map(|q| q as f64 / 4.0)
        .boxed()
}

/// An ordered box inside a `height × width` image.
pub fn arb_bbox_within(height: usize, width: usize) -> BoxedStrategy<BBox<Original>> {
    (
        arb_quarter_coord(height),
        arb_quarter_coord(height),
        arb_quarter_coord(width),
        arb_quarter_coord(width),
    )
        .prop_map(|(y0, y1, x0, x1)| {
            BBox::from_yxyx(y0.min(y1), x0.min(x1), y0.max(y1), x0.max(x1))
        })
        .boxed()
}

/// Index-aligned boxes and labels for a `height × width` image.
pub fn arb_annotations(
    height: usize,
    width: usize,
    max_objects: usize,
) -> BoxedStrategy<(Vec<BBox<Original>>, Vec<ClassId>)> {
    proptest::collection::vec(
        (arb_bbox_within(height, width), 0u32..20),
        0..=max_objects,
    )
    .prop_map(|objects| {
        let (boxes, labels): (Vec<_>, Vec<_>) = objects
            .into_iter()
            .map(|(bbox, label)| (bbox, ClassId::new(label)))
            .unzip();
        (boxes, labels)
    })
    .boxed()
}
