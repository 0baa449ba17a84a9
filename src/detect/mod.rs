//! Face detection behind a pluggable backend.
//!
//! Backends receive grayscale pixels and report faces in the shape the rest
//! of the pipeline consumes: integer pixel bounding box plus a confidence in
//! 0..=1. The built-in backends are `seeta` (SeetaFace via `rustface`, needs
//! a model file) and `stub` (deterministic, for tests and demos).

mod backend;
mod backends;
mod registry;
mod result;

use std::path::Path;

use image::RgbImage;

use crate::error::TaggerError;

pub use backend::FaceDetectorBackend;
pub use backends::{SeetaBackend, StubBackend};
pub use registry::BackendRegistry;
pub use result::{BoundingBox, FaceDetection};

/// Build the registry the command-line tools use.
///
/// The stub backend is always registered. When a model path is supplied the
/// seeta backend is registered as well and becomes the default.
pub fn default_registry(model: Option<&Path>) -> Result<BackendRegistry, TaggerError> {
    let mut registry = BackendRegistry::new();
    registry.register(StubBackend::new());
    if let Some(path) = model {
        registry.register(SeetaBackend::from_model_path(path)?);
        registry.set_default("seeta")?;
    }
    Ok(registry)
}

/// Detect faces in an in-memory image.
pub fn detect_faces(
    image: &RgbImage,
    backend: &mut dyn FaceDetectorBackend,
) -> Result<Vec<FaceDetection>, TaggerError> {
    let gray = image::imageops::grayscale(image);
    let (width, height) = gray.dimensions();
    backend.detect(gray.as_raw(), width, height)
}

/// Detect faces in an image file.
///
/// A missing path surfaces as [`TaggerError::NotFound`]; a file that cannot
/// be decoded surfaces as [`TaggerError::Unreadable`].
pub fn detect_faces_in_image(
    image_path: &Path,
    backend: &mut dyn FaceDetectorBackend,
) -> Result<Vec<FaceDetection>, TaggerError> {
    if !image_path.exists() {
        return Err(TaggerError::NotFound(image_path.to_path_buf()));
    }
    let image = image::open(image_path)
        .map_err(|e| TaggerError::unreadable(image_path, e))?
        .into_rgb8();
    log::debug!(
        "loaded {} ({}x{})",
        image_path.display(),
        image.width(),
        image.height()
    );
    detect_faces(&image, backend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_backends_sorted() {
        let mut registry = default_registry(None).unwrap();
        assert_eq!(registry.list(), vec!["stub".to_string()]);
        assert_eq!(registry.default_name(), Some("stub"));
        assert!(registry.select("stub").is_ok());
    }

    #[test]
    fn unknown_backend_is_reported_with_alternatives() {
        let mut registry = default_registry(None).unwrap();
        let err = registry.select("retinaface").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("retinaface"));
        assert!(message.contains("stub"));
    }

    #[test]
    fn missing_image_surfaces_not_found() {
        let mut backend = StubBackend::new();
        let err = detect_faces_in_image(Path::new("no/such/photo.jpg"), &mut backend).unwrap_err();
        assert!(matches!(err, TaggerError::NotFound(_)));
    }

    #[test]
    fn in_memory_detection_runs_on_grayscale() {
        let image = RgbImage::from_pixel(64, 64, image::Rgb([120, 40, 200]));
        let mut backend = StubBackend::new();
        let faces = detect_faces(&image, &mut backend).unwrap();
        assert_eq!(faces.len(), 1);
    }
}
