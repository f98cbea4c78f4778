use std::path::Path;

use wain_catalog::uploads::*;

#[test]
fn allowed_extensions_are_case_insensitive() {
    assert!(allowed_image("car.png"));
    assert!(allowed_image("car.JPEG"));
    assert!(allowed_image("car.Webp"));
    assert!(!allowed_image("car.gif"));
    assert!(!allowed_image("car"));
}

#[test]
fn stored_name_appends_timestamp_before_extension() {
    assert_eq!(
        stored_image_name("hilux.jpg", 1_650_000_000),
        Some("hilux_1650000000.jpg".to_string())
    );
}

#[test]
fn stored_name_drops_directories() {
    assert_eq!(
        stored_image_name("../../etc/evil.png", 10),
        Some("evil_10.png".to_string())
    );
    assert_eq!(
        stored_image_name("C:\\photos\\front view.webp", 10),
        Some("front_view_10.webp".to_string())
    );
}

#[test]
fn disallowed_or_empty_names_are_skipped() {
    assert_eq!(stored_image_name("", 10), None);
    assert_eq!(stored_image_name("script.sh", 10), None);
}

#[test]
fn save_image_writes_under_upload_dir() {
    let dir = tempfile::tempdir().unwrap();
    let upload = ImageUpload {
        filename: "front.png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };
    let stored = save_image(dir.path(), Some(&upload)).unwrap().unwrap();
    assert!(stored.starts_with("uploads/front_"));
    assert!(stored.ends_with(".png"));

    let name = stored.trim_start_matches("uploads/");
    let written = std::fs::read(dir.path().join(name)).unwrap();
    assert_eq!(written, upload.bytes);
}

#[test]
fn save_image_without_upload_is_none() {
    assert_eq!(save_image(Path::new("/nonexistent"), None).unwrap(), None);
}

#[test]
fn save_image_rejects_bad_extension_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let upload = ImageUpload {
        filename: "doc.pdf".to_string(),
        bytes: vec![1, 2, 3],
    };
    assert_eq!(save_image(dir.path(), Some(&upload)).unwrap(), None);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
