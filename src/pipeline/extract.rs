//! Extract stage: frame and metadata extraction from media files.
//!
//! Will be responsible for pulling frames out of videos at the configured
//! interval, reading timestamps and duration, and collecting EXIF metadata
//! from images. The working frame path lives in [`crate::ingest`] and
//! [`crate::sample`]; this stage adds the metadata side once its shape is
//! settled.

use std::path::Path;

use crate::config::Config;
use crate::error::TaggerError;
use crate::ingest::Frame;

/// Frames and metadata pulled from one media file.
#[derive(Debug, Default)]
pub struct Extraction {
    pub frames: Vec<Frame>,
}

pub struct ExtractStage {
    pub config: Config,
}

impl ExtractStage {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Extract frames and metadata from a media file.
    pub fn extract(&self, _media_file: &Path) -> Result<Extraction, TaggerError> {
        Err(TaggerError::NotImplemented("media extraction"))
    }
}
