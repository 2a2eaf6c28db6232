mod common;

use std::path::Path;

use common::{gradient_rgba, RecordingBackend};
use teknova_core::codec::{ExportFormat, ImageCodec, ImageDecoder, ImageEncoder};
use teknova_core::error::ViewerError;
use teknova_core::session::ImageSession;

#[test]
fn test_png_export_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let pixels = gradient_rgba(16, 9);

    ImageCodec
        .encode(&path, &pixels, 16, 9, ExportFormat::Png)
        .unwrap();
    let decoded = ImageCodec.decode(&path).unwrap();

    assert_eq!((decoded.width, decoded.height), (16, 9));
    assert_eq!(decoded.pixels, pixels);
}

#[test]
fn test_lossy_and_legacy_formats_write_files() {
    let dir = tempfile::tempdir().unwrap();
    let pixels = gradient_rgba(12, 10);

    for (name, format) in [
        ("out.jpg", ExportFormat::Jpeg),
        ("out.bmp", ExportFormat::Bmp),
        ("out.tga", ExportFormat::Tga),
    ] {
        let path = dir.path().join(name);
        ImageCodec.encode(&path, &pixels, 12, 10, format).unwrap();

        let decoded = ImageCodec.decode(&path).unwrap();
        assert_eq!((decoded.width, decoded.height), (12, 10), "{name}");
        assert_eq!(decoded.pixels.len(), 12 * 10 * 4, "{name}");
    }
}

#[test]
fn test_decode_sniffs_content_not_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("real.png");
    ImageCodec
        .encode(&png, &gradient_rgba(4, 4), 4, 4, ExportFormat::Png)
        .unwrap();
    let renamed = dir.path().join("mislabeled.bmp");
    std::fs::rename(&png, &renamed).unwrap();

    let decoded = ImageCodec.decode(&renamed).unwrap();
    assert_eq!((decoded.width, decoded.height), (4, 4));
}

#[test]
fn test_decode_garbage_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not an image").unwrap();

    let err = ImageCodec.decode(&path).unwrap_err();
    assert!(matches!(err, ViewerError::Decode { .. }));
}

#[test]
fn test_decode_missing_file_fails() {
    let err = ImageCodec
        .decode(Path::new("/nonexistent/teknova/image.png"))
        .unwrap_err();
    assert!(matches!(err, ViewerError::Decode { .. }));
}

#[test]
fn test_encode_rejects_mismatched_buffer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let err = ImageCodec
        .encode(&path, &[0u8; 10], 4, 4, ExportFormat::Png)
        .unwrap_err();

    assert!(matches!(err, ViewerError::InvalidDimensions { .. }));
    assert!(!path.exists());
}

#[test]
fn test_encode_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.jpg");

    let err = ImageCodec
        .encode(&path, &gradient_rgba(2, 2), 2, 2, ExportFormat::Jpeg)
        .unwrap_err();
    assert!(matches!(err, ViewerError::EncodeFailed { .. }));
}

#[test]
fn test_session_export_unknown_extension_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    ImageCodec
        .encode(&source, &gradient_rgba(8, 8), 8, 8, ExportFormat::Png)
        .unwrap();

    let mut backend = RecordingBackend::new();
    let mut session = ImageSession::new();
    session.load(&source, &mut backend, &ImageCodec).unwrap();

    let target = dir.path().join("out.xyz");
    let err = session.export(&target, &backend, &ImageCodec).unwrap_err();

    assert!(matches!(err, ViewerError::UnknownExtension { .. }));
    assert!(!target.exists());
}

#[test]
fn test_session_load_then_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    let pixels = gradient_rgba(100, 100);
    ImageCodec
        .encode(&source, &pixels, 100, 100, ExportFormat::Png)
        .unwrap();

    let mut backend = RecordingBackend::new();
    let mut session = ImageSession::new();
    session.load(&source, &mut backend, &ImageCodec).unwrap();

    let target = dir.path().join("copy.png");
    session.export(&target, &backend, &ImageCodec).unwrap();

    let copy = ImageCodec.decode(&target).unwrap();
    assert_eq!(copy.pixels, pixels);
}
