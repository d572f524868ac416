//! Multipart payload builders.

use axum_test::multipart::{MultipartForm, Part};

/// Minimal bytes that pass for a PNG payload, padded to `size` bytes.
pub fn png_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    data.resize(size.max(data.len()), 0);
    data
}

pub fn png_part(filename: &str, size: usize) -> Part {
    Part::bytes(png_bytes(size))
        .file_name(filename.to_string())
        .mime_type("image/png")
}

pub fn part(filename: &str, mime: &str, data: Vec<u8>) -> Part {
    Part::bytes(data)
        .file_name(filename.to_string())
        .mime_type(mime.to_string())
}

/// The common happy-path form: one PNG, a comment, and a recipient.
pub fn standard_form() -> MultipartForm {
    MultipartForm::new()
        .add_part("files", png_part("photo.png", 2 * 1024 * 1024))
        .add_text("text", "hello")
        .add_text("email", "a@b.com")
}
