//! Sample providers.
//!
//! A [`SampleSource`] yields raw `(image, boxes, labels, difficult)` samples
//! by index. The transform pipeline only ever talks to this trait, so it has
//! no knowledge of how or where samples are stored.

pub mod voc;

pub use voc::{VocSource, VOC_BBOX_LABEL_NAMES};

use crate::error::PrepError;
use crate::sample::Sample;

/// Anything that can hand out raw samples by index.
pub trait SampleSource {
    /// Number of samples available.
    fn len(&self) -> usize;

    /// Load sample `index`. Indices at or past [`len`](Self::len) yield
    /// [`PrepError::IndexOutOfRange`].
    fn get_example(&self, index: usize) -> Result<Sample, PrepError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable class name for a label, if the source has a vocabulary.
    fn class_name(&self, _label: u32) -> Option<&str> {
        None
    }
}

/// A source backed by samples already held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    samples: Vec<Sample>,
}

impl InMemorySource {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

impl From<Vec<Sample>> for InMemorySource {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

impl SampleSource for InMemorySource {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn get_example(&self, index: usize) -> Result<Sample, PrepError> {
        self.samples
            .get(index)
            .cloned()
            .ok_or(PrepError::IndexOutOfRange {
                index,
                len: self.samples.len(),
            })
    }
}
