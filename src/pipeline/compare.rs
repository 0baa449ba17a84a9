//! Compare stage: face comparison and clustering.
//!
//! Will be responsible for comparing facial embeddings across media files,
//! clustering similar faces, and maintaining a database of unique
//! individuals. The similarity metric, clustering algorithm, and database
//! schema are deliberately unspecified until a real implementation and its
//! tests exist; no contract beyond "accepts embeddings, returns cluster
//! groupings" should be assumed.

use std::collections::HashMap;

use crate::config::Config;
use crate::error::TaggerError;

/// A facial embedding vector produced by the detect stage.
#[derive(Clone, Debug)]
pub struct FaceEmbedding {
    pub vector: Vec<f32>,
}

/// Identifier for a cluster of matching faces.
pub type ClusterId = u32;

pub struct CompareStage {
    pub config: Config,
}

impl CompareStage {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Cluster embeddings into groups of matching faces.
    pub fn compare_faces(
        &self,
        _embeddings: &[FaceEmbedding],
    ) -> Result<HashMap<ClusterId, Vec<FaceEmbedding>>, TaggerError> {
        Err(TaggerError::NotImplemented("face comparison"))
    }

    /// Build or update the database of unique individuals.
    pub fn build_face_database(
        &self,
        _clusters: &HashMap<ClusterId, Vec<FaceEmbedding>>,
    ) -> Result<(), TaggerError> {
        Err(TaggerError::NotImplemented("face database maintenance"))
    }
}
