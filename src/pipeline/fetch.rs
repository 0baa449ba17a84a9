//! Fetch stage: media retrieval from the cloud drive.
//!
//! Will be responsible for authenticating against the drive API, querying
//! for media by criteria, downloading files for processing, and managing the
//! local download cache.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::TaggerError;

pub struct FetchStage {
    pub config: Config,
}

impl FetchStage {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetch media files matching `query` from the drive.
    pub fn fetch(&self, _query: Option<&str>) -> Result<Vec<PathBuf>, TaggerError> {
        Err(TaggerError::NotImplemented("drive fetch"))
    }
}
