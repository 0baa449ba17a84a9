use serde::Serialize;

/// Axis-aligned rectangle locating a detected face, in pixel coordinates
/// from the image's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// One detected face in one frame.
///
/// Produced by a detector backend, consumed by the drawing step. Not
/// persisted anywhere.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FaceDetection {
    pub bbox: BoundingBox,
    /// Detection confidence, normalized into 0.0..=1.0.
    pub confidence: f32,
}
