use crate::detect::backend::FaceDetectorBackend;
use crate::detect::result::{BoundingBox, FaceDetection};
use crate::error::TaggerError;

/// Minimum dimension below which the stub reports no faces.
const MIN_FACE_DIMENSION: u32 = 32;

/// Stub backend for tests and demos. No model, no I/O.
///
/// Reports a single face covering the center third of any image that is at
/// least 32px on each side, and nothing for smaller images. Deterministic by
/// construction so annotation output can be asserted byte-for-byte.
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceDetectorBackend for StubBackend {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn detect(
        &mut self,
        _gray: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<FaceDetection>, TaggerError> {
        if width < MIN_FACE_DIMENSION || height < MIN_FACE_DIMENSION {
            return Ok(vec![]);
        }
        Ok(vec![FaceDetection {
            bbox: BoundingBox {
                x: (width / 3) as i32,
                y: (height / 3) as i32,
                w: width / 3,
                h: height / 3,
            },
            confidence: 0.9,
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_one_face_on_large_images() {
        let mut backend = StubBackend::new();
        let faces = backend.detect(&[], 96, 96).unwrap();
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].bbox, BoundingBox { x: 32, y: 32, w: 32, h: 32 });
        assert_eq!(faces[0].confidence, 0.9);
    }

    #[test]
    fn reports_nothing_for_tiny_images() {
        let mut backend = StubBackend::new();
        assert!(backend.detect(&[], 16, 96).unwrap().is_empty());
        assert!(backend.detect(&[], 96, 16).unwrap().is_empty());
        assert!(backend.detect(&[], 0, 0).unwrap().is_empty());
    }
}
