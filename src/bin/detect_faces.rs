//! detect_faces - report face detections for a single image
//!
//! Prints one block per face (bounding box + confidence) or, with `--json`,
//! a machine-readable array of detections.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use media_tagger::default_registry;

#[path = "../ui.rs"]
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "detect_faces",
    about = "Detect faces in an image and report bounding boxes"
)]
struct Args {
    /// Path to the input image
    image_path: PathBuf,

    /// Detector backend (seeta requires --model)
    #[arg(default_value = "seeta")]
    backend: String,

    /// Path to the SeetaFace frontal-face model
    #[arg(long, env = "MEDIA_TAGGER_FACE_MODEL", value_name = "PATH")]
    model: Option<PathBuf>,

    /// Emit detections as JSON instead of text
    #[arg(long)]
    json: bool,

    /// UI mode for stderr progress (auto|plain|pretty)
    #[arg(long, default_value = "auto", value_name = "MODE")]
    ui: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let ui = ui::Ui::from_args(&args.ui, std::io::stderr().is_terminal());

    let mut registry = default_registry(args.model.as_deref())?;

    if !args.json {
        println!("Detecting faces in: {}", args.image_path.display());
        println!("Using detector: {}", args.backend);
        println!();
    }

    let detections = {
        let _stage = ui.stage("Detect faces");
        let backend = registry.select(&args.backend)?;
        media_tagger::detect_faces_in_image(&args.image_path, backend)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detections)?);
        return Ok(());
    }

    println!("Detected {} face(s):", detections.len());
    println!();
    for (i, face) in detections.iter().enumerate() {
        println!("Face {}:", i + 1);
        println!(
            "  Bounding Box: x={}, y={}, w={}, h={}",
            face.bbox.x, face.bbox.y, face.bbox.w, face.bbox.h
        );
        println!("  Confidence: {:.4}", face.confidence);
        println!();
    }

    if detections.is_empty() {
        println!("No faces detected in the image.");
    }

    Ok(())
}
