//! Deterministic frame source for tests and dry runs.

use image::RgbImage;

use super::{Frame, VideoInfo};
use crate::error::TaggerError;

pub(super) const DEFAULT_STUB_FRAMES: u64 = 50;
pub(super) const DEFAULT_STUB_FPS: f64 = 10.0;

const STUB_WIDTH: u32 = 64;
const STUB_HEIGHT: u32 = 48;

pub(super) struct SyntheticSource {
    total_frames: u64,
    frame_rate: f64,
    cursor: u64,
}

impl SyntheticSource {
    pub(super) fn new(total_frames: u64, frame_rate: f64) -> Self {
        Self {
            total_frames,
            frame_rate,
            cursor: 0,
        }
    }

    pub(super) fn info(&self) -> VideoInfo {
        VideoInfo {
            frame_rate: self.frame_rate,
            total_frames: self.total_frames,
        }
    }

    pub(super) fn next_frame(&mut self) -> Result<Option<Frame>, TaggerError> {
        if self.cursor >= self.total_frames {
            return Ok(None);
        }
        let index = self.cursor;
        self.cursor += 1;

        let timestamp_secs = if self.frame_rate > 0.0 {
            index as f64 / self.frame_rate
        } else {
            0.0
        };

        Ok(Some(Frame {
            index,
            timestamp_secs,
            image: synthetic_image(index),
        }))
    }
}

/// Gradient image whose pixels shift per frame, so consecutive frames differ
/// but the same index always produces the same bytes.
fn synthetic_image(index: u64) -> RgbImage {
    RgbImage::from_fn(STUB_WIDTH, STUB_HEIGHT, |x, y| {
        let v = (x as u64 + y as u64 + index) % 256;
        image::Rgb([v as u8, (v / 2) as u8, (255 - v) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_index_produces_identical_pixels() {
        assert_eq!(synthetic_image(7).as_raw(), synthetic_image(7).as_raw());
        assert_ne!(synthetic_image(7).as_raw(), synthetic_image(8).as_raw());
    }

    #[test]
    fn zero_frame_rate_pins_timestamps_to_zero() {
        let mut source = SyntheticSource::new(3, 0.0);
        while let Some(frame) = source.next_frame().unwrap() {
            assert_eq!(frame.timestamp_secs, 0.0);
        }
    }
}
