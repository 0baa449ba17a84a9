//! Every declared-but-unbuilt operation must fail with the not-implemented
//! signal and never any other error kind or a placeholder value.

use std::collections::HashMap;
use std::path::Path;

use image::RgbImage;

use media_tagger::pipeline::{
    CompareStage, DetectStage, EnrichStage, ExtractStage, FaceEmbedding, FetchStage, TagMetadata,
};
use media_tagger::{Config, TaggerError};

fn assert_not_implemented<T: std::fmt::Debug>(result: Result<T, TaggerError>) {
    match result {
        Err(TaggerError::NotImplemented(_)) => {}
        other => panic!("expected NotImplemented, got {:?}", other),
    }
}

#[test]
fn fetch_stage_is_unbuilt() {
    let stage = FetchStage::new(Config::default());
    assert_not_implemented(stage.fetch(None));
    assert_not_implemented(stage.fetch(Some("mimeType contains 'video'")));
}

#[test]
fn extract_stage_is_unbuilt() {
    let stage = ExtractStage::new(Config::default());
    assert_not_implemented(stage.extract(Path::new("holiday.mp4")));
    assert_not_implemented(stage.extract(Path::new("")));
}

#[test]
fn detect_stage_is_unbuilt() {
    let stage = DetectStage::new(Config::default());
    let image = RgbImage::new(8, 8);
    assert_not_implemented(stage.detect_faces(&image));
    assert_not_implemented(stage.detect_objects(&image));
}

#[test]
fn compare_stage_is_unbuilt() {
    let stage = CompareStage::new(Config::default());
    assert_not_implemented(stage.compare_faces(&[]));
    assert_not_implemented(stage.compare_faces(&[FaceEmbedding { vector: vec![0.0; 128] }]));
    assert_not_implemented(stage.build_face_database(&HashMap::new()));
}

#[test]
fn enrich_stage_is_unbuilt() {
    let stage = EnrichStage::new(Config::default());
    let metadata = TagMetadata::default();
    assert_not_implemented(stage.enrich_local(Path::new("holiday.jpg"), &metadata));
    assert_not_implemented(stage.enrich_drive("drive-file-id", &metadata));
}

#[test]
fn stages_receive_their_own_config() {
    let mut config = Config::default();
    config.pipeline.batch_size = 3;
    let stage = FetchStage::new(config.clone());
    assert_eq!(stage.config.pipeline.batch_size, 3);
    // The original value is unaffected; stages hold their own copy.
    config.pipeline.batch_size = 99;
    assert_eq!(stage.config.pipeline.batch_size, 3);
}
