//! Pipeline configuration.
//!
//! Configuration is an explicit immutable value handed to each stage at
//! construction. There is no hidden global: binaries build a `Config`,
//! override what their flags cover, validate, and pass it down.
//!
//! File-based loading is a declared interface only; `Config::from_file`
//! fails with a not-implemented signal until a format is settled.

use std::path::{Path, PathBuf};

use crate::error::TaggerError;

const DEFAULT_DETECTION_THRESHOLD: f32 = 0.7;
const DEFAULT_DEVICE: &str = "cpu";
const DEFAULT_BATCH_SIZE: usize = 10;
const DEFAULT_FRAME_INTERVAL_SECS: f64 = 1.0;
const DEFAULT_MAX_FRAMES: u32 = 100;
const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Top-level configuration for the tagging pipeline.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub drive: DriveSettings,
    pub models: ModelSettings,
    pub pipeline: PipelineSettings,
}

/// Cloud drive integration settings (fetch/enrich stages).
#[derive(Clone, Debug, Default)]
pub struct DriveSettings {
    /// Path to the API credentials file.
    pub credentials_path: Option<PathBuf>,
    /// Path for cached auth tokens.
    pub token_path: Option<PathBuf>,
    /// API scopes to request.
    pub scopes: Vec<String>,
    /// Drive folder to process.
    pub folder_id: Option<String>,
}

/// Model paths and inference settings (detect/compare stages).
#[derive(Clone, Debug)]
pub struct ModelSettings {
    pub face_detection_model: Option<PathBuf>,
    pub face_recognition_model: Option<PathBuf>,
    pub object_detection_model: Option<PathBuf>,
    /// Confidence threshold for keeping detections.
    pub detection_threshold: f32,
    /// Inference device selector ("cpu", "cuda", "mps").
    pub device: String,
}

/// Processing options shared across stages.
#[derive(Clone, Debug)]
pub struct PipelineSettings {
    /// Files processed per batch.
    pub batch_size: usize,
    /// Seconds between sampled video frames.
    pub frame_interval_secs: f64,
    /// Cap on frames extracted per video.
    pub max_frames: u32,
    /// Directory for processed outputs.
    pub output_dir: PathBuf,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            face_detection_model: None,
            face_recognition_model: None,
            object_detection_model: None,
            detection_threshold: DEFAULT_DETECTION_THRESHOLD,
            device: DEFAULT_DEVICE.to_string(),
        }
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            frame_interval_secs: DEFAULT_FRAME_INTERVAL_SECS,
            max_frames: DEFAULT_MAX_FRAMES,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Declared interface only; always fails with
    /// [`TaggerError::NotImplemented`].
    pub fn from_file(_config_path: &Path) -> Result<Self, TaggerError> {
        Err(TaggerError::NotImplemented("configuration file loading"))
    }

    /// Reject values outside their recognized ranges.
    ///
    /// An interval <= 0 would sample every frame; that is treated as a
    /// configuration error rather than a sampling policy.
    pub fn validate(&self) -> Result<(), TaggerError> {
        if !(self.pipeline.frame_interval_secs > 0.0) {
            return Err(TaggerError::InvalidConfig(format!(
                "frame interval must be greater than zero, got {}",
                self.pipeline.frame_interval_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.models.detection_threshold) {
            return Err(TaggerError::InvalidConfig(format!(
                "detection threshold must be within 0.0..=1.0, got {}",
                self.models.detection_threshold
            )));
        }
        if self.pipeline.batch_size == 0 {
            return Err(TaggerError::InvalidConfig(
                "batch size must be at least 1".to_string(),
            ));
        }
        if self.pipeline.max_frames == 0 {
            return Err(TaggerError::InvalidConfig(
                "max frames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
