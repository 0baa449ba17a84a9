//! media-tagger
//!
//! Scaffold for a media-tagging pipeline: fetch photos and videos from a
//! cloud drive, extract frames, run face/object detection, cluster faces,
//! and write tags back.
//!
//! # What works today
//!
//! - `media`: image/video extension classification
//! - `config`: default-valued, validated configuration
//! - `detect`: face detection behind a pluggable backend trait
//! - `ingest` + `sample`: video frame decoding and interval sampling
//! - `overlay`: bounding-box and confidence-label rendering
//!
//! # What is declared but not built
//!
//! The pipeline stages in `pipeline` (`fetch`, `extract`, `detect`,
//! `compare`, `enrich`) carry typed signatures and fail fast with
//! [`TaggerError::NotImplemented`]. They exist so callers integrate against
//! the intended shape instead of ad-hoc plumbing; none of them return
//! placeholder data.

pub mod config;
pub mod detect;
pub mod error;
pub mod ingest;
pub mod media;
pub mod overlay;
pub mod pipeline;
pub mod sample;

pub use config::{Config, DriveSettings, ModelSettings, PipelineSettings};
pub use detect::{
    default_registry, detect_faces, detect_faces_in_image, BackendRegistry, BoundingBox,
    FaceDetection, FaceDetectorBackend, SeetaBackend, StubBackend,
};
pub use error::TaggerError;
pub use ingest::{Frame, VideoInfo, VideoSource};
pub use media::{is_image_file, is_video_file, media_files};
pub use overlay::{annotate_image, draw_detections, save_image};
pub use pipeline::{CompareStage, DetectStage, EnrichStage, ExtractStage, FetchStage};
pub use sample::FrameSampler;
