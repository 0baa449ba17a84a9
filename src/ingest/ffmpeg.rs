//! FFmpeg-backed video decoding.
//!
//! Frames are decoded in-memory and scaled to RGB24. Timestamps come from
//! packet PTS where the container provides them, with a constant-rate
//! fallback otherwise.

use std::path::Path;

use ffmpeg_next as ffmpeg;
use image::RgbImage;

use super::{Frame, VideoInfo};
use crate::error::TaggerError;

pub(super) struct FfmpegSource {
    input: ffmpeg::format::context::Input,
    stream_index: usize,
    decoder: ffmpeg::codec::decoder::Video,
    scaler: ffmpeg::software::scaling::Context,
    frame_rate: f64,
    total_frames: u64,
    time_base: f64,
    frame_count: u64,
    draining: bool,
}

impl FfmpegSource {
    pub(super) fn open(path: &Path) -> Result<Self, TaggerError> {
        ffmpeg::init().map_err(|e| TaggerError::unreadable(path, e))?;
        let input =
            ffmpeg::format::input(&path).map_err(|e| TaggerError::unreadable(path, e))?;
        let stream = input
            .streams()
            .best(ffmpeg::media::Type::Video)
            .ok_or_else(|| TaggerError::unreadable(path, "file has no video track"))?;
        let stream_index = stream.index();
        let frame_rate = f64::from(stream.avg_frame_rate()).max(0.0);
        let total_frames = stream.frames().max(0) as u64;
        let time_base = f64::from(stream.time_base());

        let context = ffmpeg::codec::context::Context::from_parameters(stream.parameters())
            .map_err(|e| TaggerError::unreadable(path, e))?;
        let decoder = context
            .decoder()
            .video()
            .map_err(|e| TaggerError::unreadable(path, e))?;

        let scaler = ffmpeg::software::scaling::context::Context::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            ffmpeg::util::format::pixel::Pixel::RGB24,
            decoder.width(),
            decoder.height(),
            ffmpeg::software::scaling::flag::Flags::BILINEAR,
        )
        .map_err(|e| TaggerError::unreadable(path, e))?;

        log::info!(
            "opened {} ({}x{}, {:.2} fps)",
            path.display(),
            decoder.width(),
            decoder.height(),
            frame_rate
        );

        Ok(Self {
            input,
            stream_index,
            decoder,
            scaler,
            frame_rate,
            total_frames,
            time_base,
            frame_count: 0,
            draining: false,
        })
    }

    pub(super) fn info(&self) -> VideoInfo {
        VideoInfo {
            frame_rate: self.frame_rate,
            total_frames: self.total_frames,
        }
    }

    pub(super) fn next_frame(&mut self) -> Result<Option<Frame>, TaggerError> {
        let mut decoded = ffmpeg::frame::Video::empty();

        loop {
            if self.decoder.receive_frame(&mut decoded).is_ok() {
                return self.deliver(&decoded).map(Some);
            }
            if self.draining {
                return Ok(None);
            }

            let mut sent = false;
            for (stream, packet) in self.input.packets() {
                if stream.index() != self.stream_index {
                    continue;
                }
                if let Err(e) = self.decoder.send_packet(&packet) {
                    log::warn!("decoder rejected packet, ending sequence: {e}");
                    self.draining = true;
                }
                sent = true;
                break;
            }
            if !sent {
                // Demuxer exhausted; flush any buffered frames.
                let _ = self.decoder.send_eof();
                self.draining = true;
            }
        }
    }

    fn deliver(&mut self, decoded: &ffmpeg::frame::Video) -> Result<Frame, TaggerError> {
        let mut rgb_frame = ffmpeg::frame::Video::empty();
        self.scaler
            .run(decoded, &mut rgb_frame)
            .map_err(|e| TaggerError::Detector(format!("scale frame to RGB: {e}")))?;

        let index = self.frame_count;
        self.frame_count += 1;

        let timestamp_secs = match decoded.pts() {
            Some(pts) => pts as f64 * self.time_base,
            None if self.frame_rate > 0.0 => index as f64 / self.frame_rate,
            None => 0.0,
        };

        let (pixels, width, height) = frame_pixels(&rgb_frame)?;
        let image = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
            TaggerError::Detector("decoded frame does not match its dimensions".to_string())
        })?;

        Ok(Frame {
            index,
            timestamp_secs,
            image,
        })
    }
}

/// Copy an RGB24 frame out of FFmpeg's padded layout into a tight buffer.
fn frame_pixels(frame: &ffmpeg::frame::Video) -> Result<(Vec<u8>, u32, u32), TaggerError> {
    let width = frame.width();
    let height = frame.height();
    let row_bytes = width as usize * 3;
    let stride = frame.stride(0) as usize;
    let data = frame.data(0);

    if stride == row_bytes {
        return Ok((data.to_vec(), width, height));
    }

    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * stride;
        let end = start + row_bytes;
        pixels.extend_from_slice(data.get(start..end).ok_or_else(|| {
            TaggerError::Detector("ffmpeg frame row is out of bounds".to_string())
        })?);
    }

    Ok((pixels, width, height))
}
