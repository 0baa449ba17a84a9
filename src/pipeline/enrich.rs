//! Enrich stage: metadata write-back.
//!
//! Will be responsible for formatting discovered metadata, writing it into
//! local media files, and updating drive-side properties for fetched files.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::TaggerError;

/// Tags and descriptions produced by the earlier stages.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TagMetadata {
    pub tags: Vec<String>,
    pub description: Option<String>,
}

pub struct EnrichStage {
    pub config: Config,
}

impl EnrichStage {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write metadata into a local media file.
    pub fn enrich_local(
        &self,
        _media_file: &Path,
        _metadata: &TagMetadata,
    ) -> Result<(), TaggerError> {
        Err(TaggerError::NotImplemented("local metadata write-back"))
    }

    /// Update drive-side metadata for a fetched file.
    pub fn enrich_drive(&self, _file_id: &str, _metadata: &TagMetadata) -> Result<(), TaggerError> {
        Err(TaggerError::NotImplemented("drive metadata write-back"))
    }
}
