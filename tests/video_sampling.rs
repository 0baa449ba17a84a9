//! End-to-end frame sampling over a synthetic video: sample, detect, draw,
//! and persist one annotated frame per interval boundary.

use media_tagger::{
    detect_faces, draw_detections, save_image, FrameSampler, StubBackend, VideoSource,
};

#[test]
fn annotates_one_frame_per_sampled_interval() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame_dir = dir.path().join("clip");

    // 30 frames at 10 fps spans 3 seconds; samples land at t=0, 1, 2.
    let source = VideoSource::synthetic(30, 10.0);
    let sampler = FrameSampler::new(source, 1.0).expect("valid interval");

    let mut backend = StubBackend::new();
    let mut written = Vec::new();
    for mut frame in sampler {
        let detections = detect_faces(&frame.image, &mut backend).expect("detect");
        draw_detections(&mut frame.image, &detections);
        let path = frame_dir.join(format!(
            "frame_{:04}_t{:.1}s.jpg",
            frame.index, frame.timestamp_secs
        ));
        save_image(&frame.image, &path).expect("save frame");
        written.push(path);
    }

    assert_eq!(written.len(), 3);
    for path in &written {
        assert!(path.exists(), "{} must exist", path.display());
    }
    assert!(frame_dir.join("frame_0000_t0.0s.jpg").exists());
    assert!(frame_dir.join("frame_0010_t1.0s.jpg").exists());
    assert!(frame_dir.join("frame_0020_t2.0s.jpg").exists());
}

#[test]
fn sampler_reports_video_properties() {
    let sampler = FrameSampler::new(VideoSource::synthetic(120, 24.0), 2.0).expect("sampler");
    let info = sampler.info();
    assert_eq!(info.frame_rate, 24.0);
    assert_eq!(info.total_frames, 120);
    assert_eq!(info.duration_secs(), 5.0);
}
