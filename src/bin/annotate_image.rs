//! annotate_image - draw face detection boxes on a single image
//!
//! Writes `annotated_<name>` under the output directory. When no faces are
//! found the tool exits successfully without writing a file.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use media_tagger::{annotate_image, default_registry, detect_faces_in_image};

#[path = "../ui.rs"]
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "annotate_image",
    about = "Detect faces in an image and save an annotated copy"
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

    /// Directory annotated images are written under
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

    let mut registry = default_registry(args.model.as_deref())?;

    println!("Processing: {}", args.image_path.display());
    println!("Using detector: {}", args.backend);
    println!();

    let detections = {
        let _stage = ui.stage("Detect faces");
        let backend = registry.select(&args.backend)?;
        detect_faces_in_image(&args.image_path, backend)?
    };
    println!("Detected {} face(s)", detections.len());
    println!();

    if detections.is_empty() {
        println!("No faces detected. No annotation will be created.");
        return Ok(());
    }

    for (i, face) in detections.iter().enumerate() {
        println!("Face {}:", i + 1);
        println!(
            "  Bounding Box: x={}, y={}, w={}, h={}",
            face.bbox.x, face.bbox.y, face.bbox.w, face.bbox.h
        );
        println!("  Confidence: {:.4}", face.confidence);
    }
    println!();

    let file_name = args
        .image_path
        .file_name()
        .ok_or_else(|| anyhow!("input path has no file name"))?;
    let output_path = args
        .out
        .join(format!("annotated_{}", file_name.to_string_lossy()));

    {
        let _stage = ui.stage("Annotate image");
        annotate_image(&args.image_path, &detections, &output_path)?;
    }

    println!("Annotated image saved to: {}", output_path.display());
    println!("Successfully annotated {} face(s)", detections.len());

    Ok(())
}
