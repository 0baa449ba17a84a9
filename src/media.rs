//! Media file classification.

use std::path::{Path, PathBuf};

use crate::error::TaggerError;

/// Image suffixes the pipeline accepts.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Video suffixes the pipeline accepts.
pub const SUPPORTED_VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mov", "mkv", "wmv", "flv"];

/// Returns true when the path has a supported image suffix (any case).
pub fn is_image_file(path: &Path) -> bool {
    has_extension_in(path, &SUPPORTED_IMAGE_EXTENSIONS)
}

/// Returns true when the path has a supported video suffix (any case).
pub fn is_video_file(path: &Path) -> bool {
    has_extension_in(path, &SUPPORTED_VIDEO_EXTENSIONS)
}

/// Collect supported media files under a directory.
///
/// Declared interface only; always fails with
/// [`TaggerError::NotImplemented`].
pub fn media_files(_directory: &Path) -> Result<Vec<PathBuf>, TaggerError> {
    Err(TaggerError::NotImplemented("media directory scanning"))
}

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.contains(&ext.as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_suffixes_classify_as_images_only() {
        for ext in SUPPORTED_IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("holiday.{ext}"));
            assert!(is_image_file(&path), "{ext} should be an image");
            assert!(!is_video_file(&path), "{ext} should not be a video");
        }
    }

    #[test]
    fn video_suffixes_classify_as_videos_only() {
        for ext in SUPPORTED_VIDEO_EXTENSIONS {
            let path = PathBuf::from(format!("holiday.{ext}"));
            assert!(is_video_file(&path), "{ext} should be a video");
            assert!(!is_image_file(&path), "{ext} should not be an image");
        }
    }

    #[test]
    fn classification_ignores_case() {
        assert!(is_image_file(Path::new("scan.JPG")));
        assert!(is_image_file(Path::new("scan.JpEg")));
        assert!(is_video_file(Path::new("clip.MP4")));
        assert!(is_video_file(Path::new("clip.MoV")));
    }

    #[test]
    fn other_suffixes_are_neither() {
        for name in ["notes.txt", "archive.tar.gz", "noext", ".hidden", "movie.mp5"] {
            let path = Path::new(name);
            assert!(!is_image_file(path), "{name} misclassified as image");
            assert!(!is_video_file(path), "{name} misclassified as video");
        }
    }

    #[test]
    fn directory_scanning_is_unbuilt() {
        let err = media_files(Path::new(".")).unwrap_err();
        assert!(matches!(err, TaggerError::NotImplemented(_)));
    }
}
