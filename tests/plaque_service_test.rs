use std::error::Error;
use std::io::{Cursor, Write};
use std::path::Path;

use mesplaques::models::plaque_model::ImageKind;
use mesplaques::services::plaque_service::{PlaqueService, CAPTION_TEXT};

/// Helper: encode a solid-color PNG and write it to a temp file.
fn temp_png(side: u32) -> tempfile::NamedTempFile {
    let img = image::DynamicImage::new_rgb8(side, side);
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&buf.into_inner()).unwrap();
    file
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|w| w == &needle)
        .count()
}

// ── Generation ────────────────────────────────────────────────────

#[test]
fn generates_a_pdf_for_a_valid_png() {
    let png = temp_png(64);
    let bytes = PlaqueService::generate_preview(png.path(), ImageKind::Png).unwrap();

    assert!(bytes.starts_with(b"%PDF"), "output is not a PDF");
    assert!(count_occurrences(&bytes, b"%%EOF") >= 1);
    assert!(bytes.len() > 500, "suspiciously small document");
}

#[test]
fn repeated_generation_is_structurally_identical() {
    let png = temp_png(32);
    let first = PlaqueService::generate_preview(png.path(), ImageKind::Png).unwrap();
    let second = PlaqueService::generate_preview(png.path(), ImageKind::Png).unwrap();

    assert!(first.starts_with(b"%PDF"));
    assert!(second.starts_with(b"%PDF"));
    assert_eq!(
        count_occurrences(&first, b"/Type /Page"),
        count_occurrences(&second, b"/Type /Page"),
    );
}

#[test]
fn caption_text_is_fixed() {
    assert_eq!(CAPTION_TEXT, "Thank you for using mesplaques. See you soon!");
}

// ── Failures ──────────────────────────────────────────────────────

#[test]
fn missing_image_file_is_an_error_with_a_cause() {
    let err = PlaqueService::generate_preview(Path::new("/no/such/image.png"), ImageKind::Png)
        .unwrap_err();

    assert!(err.to_string().contains("failed to open image file"));
    assert!(err.source().is_some(), "io cause should be preserved");
}

#[test]
fn corrupt_image_data_is_an_error_with_a_cause() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not a png").unwrap();

    let err = PlaqueService::generate_preview(file.path(), ImageKind::Png).unwrap_err();

    assert!(err.to_string().contains("failed to decode image data"));
    assert!(err.source().is_some(), "decoder cause should be preserved");
}
