use std::path::Path;

use crate::detect::backend::FaceDetectorBackend;
use crate::detect::result::{BoundingBox, FaceDetection};
use crate::error::TaggerError;

/// SeetaFace classifier scores are unbounded; strong frontal faces land
/// around 30, so that is used as the ceiling when normalizing into 0..=1.
const SCORE_CEILING: f64 = 30.0;

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The frontal-face model is loaded from a user-supplied path; it is not
/// bundled with the binary.
pub struct SeetaBackend {
    model: rustface::Model,
}

impl SeetaBackend {
    /// Load the SeetaFace model from `path`.
    pub fn from_model_path(path: &Path) -> Result<Self, TaggerError> {
        let bytes = std::fs::read(path).map_err(|e| TaggerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let model = rustface::read_model(std::io::Cursor::new(bytes)).map_err(|e| {
            TaggerError::Detector(format!(
                "failed to load face model {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self { model })
    }
}

impl FaceDetectorBackend for SeetaBackend {
    fn name(&self) -> &'static str {
        "seeta"
    }

    fn detect(
        &mut self,
        gray: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<FaceDetection>, TaggerError> {
        // rustface detectors are stateful across calls; building one per
        // frame keeps detection independent of frame order.
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceDetection {
                    bbox: BoundingBox {
                        x: bbox.x(),
                        y: bbox.y(),
                        w: bbox.width(),
                        h: bbox.height(),
                    },
                    confidence: (face.score() / SCORE_CEILING).clamp(0.0, 1.0) as f32,
                }
            })
            .collect())
    }
}
