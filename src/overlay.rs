//! Bounding-box and label rendering.
//!
//! Detections are drawn as 2px rectangles with the confidence score in a
//! filled label, placed above the box unless that would clip past the top of
//! the image. The score text uses an embedded 5x7 digit font so no font
//! files are needed at runtime. All writes are clipped to the image bounds.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::detect::FaceDetection;
use crate::error::TaggerError;

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const BOX_THICKNESS: i64 = 2;

const GLYPH_WIDTH: i64 = 5;
const GLYPH_HEIGHT: i64 = 7;
const GLYPH_SCALE: i64 = 2;
const GLYPH_ADVANCE: i64 = (GLYPH_WIDTH + 1) * GLYPH_SCALE;
const LABEL_PAD: i64 = 4;

/// Draw every detection's rectangle and confidence label onto `image`.
///
/// An empty detection slice leaves the pixels untouched.
pub fn draw_detections(image: &mut RgbImage, detections: &[FaceDetection]) {
    for detection in detections {
        draw_detection(image, detection);
    }
}

/// Annotate an image file and persist the result to `output_path`, creating
/// intermediate directories as needed.
pub fn annotate_image(
    image_path: &Path,
    detections: &[FaceDetection],
    output_path: &Path,
) -> Result<(), TaggerError> {
    if !image_path.exists() {
        return Err(TaggerError::NotFound(image_path.to_path_buf()));
    }
    let mut image = image::open(image_path)
        .map_err(|e| TaggerError::unreadable(image_path, e))?
        .into_rgb8();

    draw_detections(&mut image, detections);
    save_image(&image, output_path)?;
    log::info!("annotated image saved to {}", output_path.display());
    Ok(())
}

/// Write an image to `path`, creating parent directories as needed.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), TaggerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TaggerError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    image.save(path).map_err(|e| TaggerError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })
}

fn draw_detection(image: &mut RgbImage, detection: &FaceDetection) {
    let x = detection.bbox.x as i64;
    let y = detection.bbox.y as i64;
    let w = detection.bbox.w as i64;
    let h = detection.bbox.h as i64;

    fill_rect(image, x, y, x + w, y + BOX_THICKNESS, BOX_COLOR);
    fill_rect(image, x, y + h - BOX_THICKNESS, x + w, y + h, BOX_COLOR);
    fill_rect(image, x, y, x + BOX_THICKNESS, y + h, BOX_COLOR);
    fill_rect(image, x + w - BOX_THICKNESS, y, x + w, y + h, BOX_COLOR);

    let label = format!("{:.2}", detection.confidence);
    let text_h = GLYPH_HEIGHT * GLYPH_SCALE;
    let text_w = label.chars().count() as i64 * GLYPH_ADVANCE;

    // Baseline sits above the box; fall back to below when above would clip.
    let baseline = if y - 10 > 10 { y - 10 } else { y + h + 20 };

    fill_rect(
        image,
        x,
        baseline - text_h - LABEL_PAD,
        x + text_w,
        baseline + LABEL_PAD,
        BOX_COLOR,
    );
    draw_text(image, &label, x, baseline - text_h);
}

fn draw_text(image: &mut RgbImage, text: &str, left: i64, top: i64) {
    let mut cursor = left;
    for c in text.chars() {
        draw_glyph(image, c, cursor, top);
        cursor += GLYPH_ADVANCE;
    }
}

fn draw_glyph(image: &mut RgbImage, c: char, left: i64, top: i64) {
    let rows = glyph_rows(c);
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                let px = left + col * GLYPH_SCALE;
                let py = top + row as i64 * GLYPH_SCALE;
                fill_rect(
                    image,
                    px,
                    py,
                    px + GLYPH_SCALE,
                    py + GLYPH_SCALE,
                    TEXT_COLOR,
                );
            }
        }
    }
}

/// 5x7 bitmaps for the characters a confidence label can contain.
fn glyph_rows(c: char) -> [u8; 7] {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        _ => [0; 7],
    }
}

/// Fill `[x0, x1) x [y0, y1)`, clipped to the image.
fn fill_rect(image: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let x0 = x0.clamp(0, image.width() as i64);
    let x1 = x1.clamp(0, image.width() as i64);
    let y0 = y0.clamp(0, image.height() as i64);
    let y1 = y1.clamp(0, image.height() as i64);
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}
