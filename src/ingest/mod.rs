//! Video frame sources.
//!
//! A `VideoSource` decodes a video into an ordered sequence of RGB frames
//! with monotonically increasing timestamps. Two backends exist:
//!
//! - Synthetic (always available): deterministic frames at a constant rate,
//!   reachable through `stub://` paths or [`VideoSource::synthetic`].
//! - FFmpeg (feature `video-ffmpeg`): decodes real files via `ffmpeg-next`.
//!
//! Failure to open a source is surfaced at construction; decode failures
//! mid-stream end the sequence.

mod synthetic;

#[cfg(feature = "video-ffmpeg")]
mod ffmpeg;

use std::path::Path;

use image::RgbImage;

use crate::error::TaggerError;

use synthetic::SyntheticSource;

#[cfg(feature = "video-ffmpeg")]
use ffmpeg::FfmpegSource;

/// One decoded frame.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Position in the decoded sequence, starting at zero.
    pub index: u64,
    /// Time offset within the video, in seconds.
    pub timestamp_secs: f64,
    pub image: RgbImage,
}

/// Reported properties of an opened video.
#[derive(Clone, Copy, Debug)]
pub struct VideoInfo {
    /// Frames per second; zero when the container does not report a rate.
    pub frame_rate: f64,
    /// Total frame count; zero when unknown.
    pub total_frames: u64,
}

impl VideoInfo {
    /// Video duration in seconds. Zero when the frame rate is unreadable.
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate > 0.0 {
            self.total_frames as f64 / self.frame_rate
        } else {
            0.0
        }
    }
}

/// A decodable video, dispatching to the available backend.
pub struct VideoSource {
    backend: SourceBackend,
}

enum SourceBackend {
    Synthetic(SyntheticSource),
    #[cfg(feature = "video-ffmpeg")]
    Ffmpeg(FfmpegSource),
}

impl std::fmt::Debug for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSource")
            .field("info", &self.info())
            .finish_non_exhaustive()
    }
}

impl VideoSource {
    /// Open a video by path. `stub://` paths map to the synthetic backend.
    pub fn open(path: &Path) -> Result<Self, TaggerError> {
        let raw = path.to_string_lossy();
        if raw.starts_with("stub://") {
            return Ok(Self::synthetic(
                synthetic::DEFAULT_STUB_FRAMES,
                synthetic::DEFAULT_STUB_FPS,
            ));
        }
        if !path.exists() {
            return Err(TaggerError::NotFound(path.to_path_buf()));
        }
        #[cfg(feature = "video-ffmpeg")]
        {
            Ok(Self {
                backend: SourceBackend::Ffmpeg(FfmpegSource::open(path)?),
            })
        }
        #[cfg(not(feature = "video-ffmpeg"))]
        {
            Err(TaggerError::unreadable(
                path,
                "video decoding requires the video-ffmpeg feature",
            ))
        }
    }

    /// A synthetic source producing `total_frames` frames at `frame_rate`.
    pub fn synthetic(total_frames: u64, frame_rate: f64) -> Self {
        Self {
            backend: SourceBackend::Synthetic(SyntheticSource::new(total_frames, frame_rate)),
        }
    }

    pub fn info(&self) -> VideoInfo {
        match &self.backend {
            SourceBackend::Synthetic(source) => source.info(),
            #[cfg(feature = "video-ffmpeg")]
            SourceBackend::Ffmpeg(source) => source.info(),
        }
    }

    /// Decode the next frame, or `None` at the end of the sequence.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, TaggerError> {
        match &mut self.backend {
            SourceBackend::Synthetic(source) => source.next_frame(),
            #[cfg(feature = "video-ffmpeg")]
            SourceBackend::Ffmpeg(source) => source.next_frame(),
        }
    }
}
