use std::path::PathBuf;
use thiserror::Error;

/// The main error type for detprep operations.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions {height}x{width} (height and width must be positive)")]
    InvalidDimensions { height: f64, width: f64 },

    #[error("Invalid channel count {channels} (expected 3 RGB channels)")]
    InvalidChannels { channels: usize },

    #[error("Invalid resize scale {scale} (must be finite and positive)")]
    InvalidScale { scale: f64 },

    #[error("Box/label count mismatch: {boxes} box(es) but {labels} label(s)")]
    LengthMismatch { boxes: usize, labels: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse config from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Sample index {index} out of range (dataset has {len} sample(s))")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid VOC layout at {path}: {message}")]
    VocLayoutInvalid { path: PathBuf, message: String },

    #[error("Failed to parse VOC XML {path}: {message}")]
    VocXmlParse { path: PathBuf, message: String },

    #[error("Unknown class '{name}' in {path}")]
    UnknownClass { path: PathBuf, name: String },

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write report: {0}")]
    ReportWrite(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
