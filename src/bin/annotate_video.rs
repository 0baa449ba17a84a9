//! annotate_video - sample video frames and annotate detected faces
//!
//! Samples one frame per interval, runs face detection on each sampled
//! frame, and writes annotated frames under `<out>/<video stem>/`. Per-frame
//! progress goes to stdout; Ctrl-C stops cleanly between frames.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;

use media_tagger::{
    default_registry, detect_faces, draw_detections, save_image, Config, FrameSampler, VideoSource,
};

#[path = "../ui.rs"]
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "annotate_video",
    about = "Sample video frames and save annotated copies of each"
)]
struct Args {
    /// Path to the input video (stub:// for a synthetic source)
    video_path: PathBuf,

    /// Detector backend (seeta requires --model)
    #[arg(default_value = "seeta")]
    backend: String,

    /// Path to the SeetaFace frontal-face model
    #[arg(long, env = "MEDIA_TAGGER_FACE_MODEL", value_name = "PATH")]
    model: Option<PathBuf>,

    /// Seconds between sampled frames
    #[arg(long, default_value_t = 1.0, value_name = "SECS")]
    interval: f64,

    /// Directory annotated frames are written under
    #[arg(long, default_value = "outputs", value_name = "DIR")]
    out: PathBuf,

    /// UI mode for stderr progress (auto|plain|pretty)
    #[arg(long, default_value = "auto", value_name = "MODE")]
    ui: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let ui = ui::Ui::from_args(&args.ui, std::io::stderr().is_terminal());

    let mut config = Config::default();
    config.pipeline.frame_interval_secs = args.interval;
    config.validate()?;

    let mut registry = default_registry(args.model.as_deref())?;
    let backend = registry.select(&args.backend)?;

    let source = {
        let _stage = ui.stage("Open video");
        VideoSource::open(&args.video_path)?
    };
    let info = source.info();

    println!("Processing video: {}", args.video_path.display());
    println!("Using detector: {}", args.backend);
    println!();
    println!("Video properties:");
    println!("  FPS: {:.2}", info.frame_rate);
    println!("  Total frames: {}", info.total_frames);
    println!("  Duration: {:.2}s", info.duration_secs());
    println!("  Sampling interval: {}s", args.interval);
    println!();

    let stem = args
        .video_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("input path has no file name"))?;
    let frame_dir = args.out.join(stem);

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = stop.clone();
        ctrlc::set_handler(move || {
            stop.store(true, Ordering::SeqCst);
        })
        .expect("error setting Ctrl-C handler");
    }

    let sampler = FrameSampler::new(source, config.pipeline.frame_interval_secs)?;
    let mut processed = 0u64;

    for mut frame in sampler {
        if stop.load(Ordering::SeqCst) {
            println!("Interrupted; stopping after {processed} frame(s)");
            break;
        }

        println!(
            "Processing frame {} at t={:.1}s",
            frame.index, frame.timestamp_secs
        );

        let detections = detect_faces(&frame.image, backend)?;
        println!("  Detected {} face(s)", detections.len());

        draw_detections(&mut frame.image, &detections);
        let frame_path = frame_dir.join(format!(
            "frame_{:04}_t{:.1}s.jpg",
            frame.index, frame.timestamp_secs
        ));
        save_image(&frame.image, &frame_path)?;

        processed += 1;
    }

    println!();
    println!("Processed {processed} frame(s)");
    println!("Annotated frames saved to: {}", frame_dir.display());

    Ok(())
}
