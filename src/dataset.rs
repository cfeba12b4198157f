//! Indexed access to transformed training samples.

use rand::{rngs::StdRng, SeedableRng};

use crate::config::TransformConfig;
use crate::error::PrepError;
use crate::sample::{Sample, TransformedSample};
use crate::source::SampleSource;
use crate::transform::{decide_flip, FlipDecision, SampleTransform};

/// A sample source paired with a transform.
///
/// With a seed, every index gets its own generator derived from
/// `(seed, index)`, so `get` is reproducible per sample no matter which
/// thread calls it or in what order. Without a seed, flips come from the
/// thread-local generator.
#[derive(Clone, Debug)]
pub struct Dataset<S> {
    source: S,
    transform: SampleTransform,
    seed: Option<u64>,
}

impl<S: SampleSource> Dataset<S> {
    pub fn new(source: S, config: TransformConfig, seed: Option<u64>) -> Self {
        Self {
            source,
            transform: SampleTransform::new(config),
            seed,
        }
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn transform(&self) -> &SampleTransform {
        &self.transform
    }

    /// Load and transform sample `index`.
    ///
    /// Difficult flags are dropped; the output carries only the image,
    /// boxes, labels and scale.
    pub fn get(&self, index: usize) -> Result<TransformedSample, PrepError> {
        self.get_with_details(index).map(|item| item.output)
    }

    /// Like [`Dataset::get`], but also returns the raw sample and the flip
    /// decision that was applied.
    pub fn get_with_details(&self, index: usize) -> Result<DatasetItem, PrepError> {
        let raw = self.source.get_example(index)?;
        let flip = self.draw_flip(index);
        let output =
            self.transform
                .transform_with_flip(&raw.image, &raw.boxes, &raw.labels, flip)?;
        Ok(DatasetItem { raw, flip, output })
    }

    fn draw_flip(&self, index: usize) -> FlipDecision {
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(sample_seed(seed, index));
                decide_flip(true, false, &mut rng)
            }
            None => decide_flip(true, false, &mut rand::rng()),
        }
    }
}

/// A transformed sample together with what produced it.
#[derive(Clone, Debug)]
pub struct DatasetItem {
    pub raw: Sample,
    pub flip: FlipDecision,
    pub output: TransformedSample,
}

/// Mix a dataset-wide seed with a sample index into a per-sample seed.
fn sample_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
