//! Single-sample inspection.
//!
//! Runs the transform pipeline on one sample and summarizes what it did:
//! sizes before and after, the realized scale and flip, and every box
//! before and after re-projection.

mod report;

pub use report::{ObjectRow, SampleReport, ScaleReport};

use crate::config::TransformConfig;
use crate::dataset::Dataset;
use crate::error::PrepError;
use crate::source::SampleSource;
use crate::transform::{compute_scale, resized_dims};

/// Compute the scale and output size for a `height × width` image.
pub fn inspect_scale(
    height: usize,
    width: usize,
    config: &TransformConfig,
) -> Result<ScaleReport, PrepError> {
    let scale = compute_scale(height as f64, width as f64, config.min_size, config.max_size)?;
    let output = resized_dims(height, width, scale);
    Ok(ScaleReport {
        config: *config,
        input: (height, width).into(),
        scale,
        output: output.into(),
    })
}

/// Transform sample `index` of `dataset` and report the result.
pub fn inspect_sample<S: SampleSource>(
    dataset: &Dataset<S>,
    index: usize,
) -> Result<SampleReport, PrepError> {
    let item = dataset.get_with_details(index)?;
    let source = dataset.source();

    let objects = item
        .raw
        .boxes
        .iter()
        .zip(&item.output.boxes)
        .zip(&item.output.labels)
        .enumerate()
        .map(|(i, ((original, transformed), label))| ObjectRow {
            label: label.as_u32(),
            class_name: source.class_name(label.as_u32()).map(str::to_string),
            difficult: item.raw.difficult.get(i).copied().unwrap_or(false),
            original: original.to_yxyx(),
            transformed: transformed.to_yxyx(),
        })
        .collect();

    Ok(SampleReport {
        index,
        config: *dataset.transform().config(),
        original: item.raw.image.dims().into(),
        resized: item.output.image.dims().into(),
        scale: item.output.scale,
        flip: item.flip,
        channel_means: item.output.image.channel_means(),
        objects,
    })
}
