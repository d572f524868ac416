//! Upload request validation
//!
//! Content-type allow-list and size-ceiling checks run before any remote call; a
//! failure here short-circuits the whole request with a client error.

use crate::error::AppError;
use crate::models::FileAttachment;

pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_MAX_FILES_PER_REQUEST: usize = 5;

/// Default content-type allow-list: JPEG, PNG, PDF, DOC, DOCX.
pub fn default_allowed_content_types() -> Vec<String> {
    [
        "image/jpeg",
        "image/jpg",
        "image/png",
        "application/pdf",
        "application/msword",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_content_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against the allow-list. Compares the normalized MIME type
/// only, so parameters cannot bypass the check.
pub fn validate_content_type(content_type: &str, allowed: &[String]) -> Result<(), AppError> {
    let normalized = normalize_content_type(content_type).to_lowercase();
    if !allowed.iter().any(|ct| normalized == ct.to_lowercase()) {
        return Err(AppError::InvalidInput(format!(
            "Invalid file type '{}'. Allowed types: {}",
            normalized,
            allowed.join(", ")
        )));
    }
    Ok(())
}

/// Validate file size against the per-file ceiling.
pub fn validate_file_size(filename: &str, size: usize, max_size: usize) -> Result<(), AppError> {
    if size > max_size {
        return Err(AppError::InvalidInput(format!(
            "File '{}' exceeds the maximum allowed size of {} MB",
            filename,
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Validate a whole attachment against the configured limits.
pub fn validate_attachment(
    file: &FileAttachment,
    max_size: usize,
    allowed: &[String],
) -> Result<(), AppError> {
    validate_content_type(&file.content_type, allowed)?;
    validate_file_size(&file.filename, file.size(), max_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorMetadata;

    #[test]
    fn test_default_allow_list_accepts_png_and_pdf() {
        let allowed = default_allowed_content_types();
        assert!(validate_content_type("image/png", &allowed).is_ok());
        assert!(validate_content_type("application/pdf", &allowed).is_ok());
    }

    #[test]
    fn test_disallowed_type_names_the_type() {
        let allowed = default_allowed_content_types();
        let err = validate_content_type("application/zip", &allowed).unwrap_err();
        assert!(err.to_string().contains("application/zip"));
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn test_content_type_parameters_are_stripped() {
        let allowed = default_allowed_content_types();
        assert!(validate_content_type("image/jpeg; charset=utf-8", &allowed).is_ok());
        assert!(validate_content_type("application/zip; boundary=x", &allowed).is_err());
    }

    #[test]
    fn test_content_type_comparison_is_case_insensitive() {
        let allowed = default_allowed_content_types();
        assert!(validate_content_type("IMAGE/PNG", &allowed).is_ok());
    }

    #[test]
    fn test_file_size_ceiling() {
        assert!(validate_file_size("a.png", DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_MAX_FILE_SIZE_BYTES).is_ok());
        let err =
            validate_file_size("a.png", DEFAULT_MAX_FILE_SIZE_BYTES + 1, DEFAULT_MAX_FILE_SIZE_BYTES)
                .unwrap_err();
        assert!(err.to_string().contains("a.png"));
        assert!(err.to_string().contains("5 MB"));
    }

    #[test]
    fn test_validate_attachment() {
        let file = FileAttachment {
            filename: "photo.png".to_string(),
            content_type: "image/png".to_string(),
            data: vec![0u8; 1024],
        };
        assert!(validate_attachment(&file, DEFAULT_MAX_FILE_SIZE_BYTES, &default_allowed_content_types()).is_ok());
    }
}
