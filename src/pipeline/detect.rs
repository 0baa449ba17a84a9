//! Detect stage: batch face and object detection.
//!
//! Will be responsible for running face and object models over extracted
//! frames and computing facial embeddings for the compare stage. Per-image
//! face detection already works through [`crate::detect`]; this stage covers
//! the batch/object/embedding surface that does not exist yet.

use image::RgbImage;

use crate::config::Config;
use crate::detect::{BoundingBox, FaceDetection};
use crate::error::TaggerError;

/// One detected object with its class label.
#[derive(Clone, Debug)]
pub struct ObjectDetection {
    pub bbox: BoundingBox,
    pub label: String,
    pub confidence: f32,
}

pub struct DetectStage {
    pub config: Config,
}

impl DetectStage {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Detect faces and compute embeddings for an extracted frame.
    pub fn detect_faces(&self, _image: &RgbImage) -> Result<Vec<FaceDetection>, TaggerError> {
        Err(TaggerError::NotImplemented("stage-level face detection"))
    }

    /// Detect labeled objects in an extracted frame.
    pub fn detect_objects(&self, _image: &RgbImage) -> Result<Vec<ObjectDetection>, TaggerError> {
        Err(TaggerError::NotImplemented("object detection"))
    }
}
