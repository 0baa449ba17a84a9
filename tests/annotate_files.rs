//! File-level annotation round trips: load, detect, draw, persist.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

use media_tagger::{
    annotate_image, detect_faces_in_image, BoundingBox, FaceDetection, StubBackend, TaggerError,
};

fn write_test_image(path: &Path, width: u32, height: u32) {
    let image = RgbImage::from_pixel(width, height, Rgb([90, 90, 90]));
    image.save(path).expect("write test image");
}

#[test]
fn detects_and_annotates_into_nested_output_dirs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("portrait.png");
    write_test_image(&input, 96, 96);

    let mut backend = StubBackend::new();
    let detections = detect_faces_in_image(&input, &mut backend).expect("detect");
    assert_eq!(detections.len(), 1);

    let output = dir.path().join("outputs/nested/annotated_portrait.png");
    annotate_image(&input, &detections, &output).expect("annotate");

    assert!(output.exists(), "annotated file must be written");
    let annotated = image::open(&output).expect("reload annotated").into_rgb8();
    assert_eq!(annotated.dimensions(), (96, 96));
    // The box's top-left corner pixel is painted green.
    let bbox = detections[0].bbox;
    assert_eq!(
        *annotated.get_pixel(bbox.x as u32, bbox.y as u32),
        Rgb([0, 255, 0])
    );
}

#[test]
fn zero_detections_reencode_without_drawing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("plain.png");
    write_test_image(&input, 40, 40);

    let output = dir.path().join("annotated_plain.png");
    annotate_image(&input, &[], &output).expect("annotate");

    // PNG re-encoding is lossless, so the pixels must match the source
    // exactly when nothing was drawn.
    let source = image::open(&input).expect("reload source").into_rgb8();
    let annotated = image::open(&output).expect("reload annotated").into_rgb8();
    assert_eq!(source.as_raw(), annotated.as_raw());
}

#[test]
fn missing_input_is_reported_as_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("absent.jpg");

    let mut backend = StubBackend::new();
    let err = detect_faces_in_image(&missing, &mut backend).unwrap_err();
    assert!(matches!(err, TaggerError::NotFound(_)));

    let err = annotate_image(&missing, &[], &dir.path().join("out.jpg")).unwrap_err();
    assert!(matches!(err, TaggerError::NotFound(_)));
}

#[test]
fn undecodable_input_is_reported_as_unreadable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let corrupt = dir.path().join("corrupt.jpg");
    fs::write(&corrupt, b"this is not a jpeg").expect("write corrupt file");

    let mut backend = StubBackend::new();
    let err = detect_faces_in_image(&corrupt, &mut backend).unwrap_err();
    assert!(matches!(err, TaggerError::Unreadable { .. }));

    let err = annotate_image(&corrupt, &[], &dir.path().join("out.jpg")).unwrap_err();
    assert!(matches!(err, TaggerError::Unreadable { .. }));
}

#[test]
fn detections_outside_the_image_do_not_break_annotation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("small.png");
    write_test_image(&input, 32, 32);

    let detections = [FaceDetection {
        bbox: BoundingBox {
            x: -5,
            y: -5,
            w: 100,
            h: 100,
        },
        confidence: 1.0,
    }];
    let output = dir.path().join("annotated_small.png");
    annotate_image(&input, &detections, &output).expect("annotate");
    assert!(output.exists());
}
