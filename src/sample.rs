//! Interval-based frame sampling.
//!
//! The sampler walks a video's decoded frame sequence and yields each frame
//! whose timestamp reaches the next scheduled boundary, then advances the
//! boundary by a fixed interval. The schedule is absolute (0, I, 2I, ...);
//! there is no drift correction beyond the greater-or-equal check.

use crate::error::TaggerError;
use crate::ingest::{Frame, VideoInfo, VideoSource};

/// Lazy, non-restartable sequence of sampled frames.
///
/// Decode failures mid-stream end the sequence; only failure to open the
/// source (at [`VideoSource::open`]) or an invalid interval (here) surface
/// as errors.
pub struct FrameSampler {
    source: VideoSource,
    interval_secs: f64,
    next_sample_secs: f64,
    done: bool,
}

impl std::fmt::Debug for FrameSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameSampler")
            .field("source", &self.source)
            .field("interval_secs", &self.interval_secs)
            .field("next_sample_secs", &self.next_sample_secs)
            .field("done", &self.done)
            .finish()
    }
}

impl FrameSampler {
    /// Wrap a source with a sampling interval in seconds.
    ///
    /// An interval <= 0 (or NaN) is rejected; it would select every frame.
    pub fn new(source: VideoSource, interval_secs: f64) -> Result<Self, TaggerError> {
        if !(interval_secs > 0.0) {
            return Err(TaggerError::InvalidConfig(format!(
                "sampling interval must be greater than zero, got {interval_secs}"
            )));
        }
        Ok(Self {
            source,
            interval_secs,
            next_sample_secs: 0.0,
            done: false,
        })
    }

    /// Properties of the underlying video.
    pub fn info(&self) -> VideoInfo {
        self.source.info()
    }
}

impl Iterator for FrameSampler {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        loop {
            match self.source.next_frame() {
                Ok(Some(frame)) => {
                    if frame.timestamp_secs >= self.next_sample_secs {
                        self.next_sample_secs += self.interval_secs;
                        return Some(frame);
                    }
                }
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    log::warn!("frame decoding ended early: {e}");
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sampled_indices(frames: u64, fps: f64, interval: f64) -> Vec<(u64, f64)> {
        let sampler = FrameSampler::new(VideoSource::synthetic(frames, fps), interval)
            .expect("valid interval");
        sampler
            .map(|frame| (frame.index, frame.timestamp_secs))
            .collect()
    }

    #[test]
    fn selects_one_frame_per_interval_boundary() {
        // 50 frames at 10 fps spans 5 seconds; one sample per second.
        let samples = sampled_indices(50, 10.0, 1.0);
        let indices: Vec<u64> = samples.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 10, 20, 30, 40]);
        for (k, (_, ts)) in samples.iter().enumerate() {
            assert_eq!(*ts, k as f64);
        }
    }

    #[test]
    fn each_boundary_crossing_frame_is_selected_once() {
        let samples = sampled_indices(120, 30.0, 0.5);
        let indices: Vec<u64> = samples.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 15, 30, 45, 60, 75, 90, 105]);
        let mut deduped = indices.clone();
        deduped.dedup();
        assert_eq!(deduped, indices);
    }

    #[test]
    fn interval_longer_than_video_selects_only_the_start() {
        let samples = sampled_indices(30, 10.0, 60.0);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].0, 0);
    }

    #[test]
    fn boundary_that_falls_between_frames_picks_the_next_frame() {
        // 4 fps with a 0.375s interval: boundaries at 0, 0.375, 0.75, ...
        // land between 0.25s-spaced frames, so the first frame at or past
        // each boundary is taken.
        let samples = sampled_indices(8, 4.0, 0.375);
        let indices: Vec<u64> = samples.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2, 3, 5, 6]);
    }

    #[test]
    fn non_positive_interval_is_a_configuration_error() {
        for interval in [0.0, -0.5, f64::NAN] {
            let err = FrameSampler::new(VideoSource::synthetic(10, 10.0), interval).unwrap_err();
            assert!(matches!(err, TaggerError::InvalidConfig(_)));
        }
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(sampled_indices(0, 10.0, 1.0).is_empty());
    }
}
