use crate::detect::result::FaceDetection;
use crate::error::TaggerError;

/// Face detector backend trait.
///
/// Backends receive a row-major grayscale buffer and report faces in pixel
/// coordinates with a confidence normalized into 0.0..=1.0. Implementations
/// must treat the pixel slice as read-only and ephemeral.
pub trait FaceDetectorBackend: Send {
    /// Backend identifier, as selected on the command line.
    fn name(&self) -> &'static str;

    /// Run detection on a `width`x`height` grayscale image.
    fn detect(
        &mut self,
        gray: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<FaceDetection>, TaggerError>;
}

impl std::fmt::Debug for dyn FaceDetectorBackend + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceDetectorBackend")
            .field("name", &self.name())
            .finish()
    }
}
