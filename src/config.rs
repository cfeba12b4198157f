//! Pipeline-wide resize configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PrepError;

/// Default target length for the shorter image edge.
pub const DEFAULT_MIN_SIZE: f64 = 600.0;
/// Default cap on the longer image edge.
pub const DEFAULT_MAX_SIZE: f64 = 1000.0;

/// Size bounds shared by every sample the pipeline processes.
///
/// The transform itself never validates these; a `max_size` below
/// `min_size` simply makes the longer-edge cap win every time. Call
/// [`TransformConfig::validate`] at the edge of the program to reject such
/// configurations up front.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Target length for the shorter image edge.
    pub min_size: f64,
    /// Hard cap on the longer image edge.
    pub max_size: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl TransformConfig {
    pub fn new(min_size: f64, max_size: f64) -> Self {
        Self { min_size, max_size }
    }

    /// Load a config from a JSON file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, PrepError> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|source| PrepError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject sizes that would make the scale computation ill-defined.
    pub fn validate(&self) -> Result<(), PrepError> {
        for (name, value) in [("min_size", self.min_size), ("max_size", self.max_size)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PrepError::InvalidConfig {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }

        if self.max_size < self.min_size {
            return Err(PrepError::InvalidConfig {
                message: format!(
                    "max_size ({}) must not be smaller than min_size ({})",
                    self.max_size, self.min_size
                ),
            });
        }

        Ok(())
    }
}
