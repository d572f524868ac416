//! Multipart extraction for the upload endpoint
//!
//! Buffers file parts into memory and collects the optional text and email fields.
//! Repeated `files` parts form a multi-file request; the singular `file` part is the
//! legacy single-file mode and changes the success response shape.

use axum::extract::multipart::Field;
use axum::extract::Multipart;

use dropgate_core::{AppError, FileAttachment, UploadRequest};

/// Extraction result: the assembled request plus whether the legacy single-file field
/// was used.
pub struct ExtractedUpload {
    pub request: UploadRequest,
    pub single_file_mode: bool,
}

pub async fn extract_upload_request(
    mut multipart: Multipart,
    max_files: usize,
) -> Result<ExtractedUpload, AppError> {
    let mut files = Vec::new();
    let mut text: Option<String> = None;
    let mut email: Option<String> = None;
    let mut used_single = false;
    let mut used_plural = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "files" => {
                used_plural = true;
                files.push(read_attachment(field).await?);
            }
            "file" => {
                if used_single {
                    return Err(AppError::InvalidInput(
                        "Multiple 'file' fields are not allowed; use repeated 'files' fields for multi-file uploads".to_string(),
                    ));
                }
                used_single = true;
                files.push(read_attachment(field).await?);
            }
            "text" => {
                text = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read text field: {}", e))
                })?);
            }
            "email" => {
                email = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read email field: {}", e))
                })?);
            }
            // Unknown fields are ignored
            _ => {}
        }

        if files.len() > max_files {
            return Err(AppError::InvalidInput(format!(
                "Too many files uploaded; at most {} are allowed.",
                max_files
            )));
        }
    }

    if used_single && used_plural {
        return Err(AppError::InvalidInput(
            "Use either the 'file' field or repeated 'files' fields, not both.".to_string(),
        ));
    }

    Ok(ExtractedUpload {
        request: UploadRequest {
            files,
            text,
            recipient: email.filter(|e| !e.trim().is_empty()),
        },
        single_file_mode: used_single,
    })
}

async fn read_attachment(field: Field<'_>) -> Result<FileAttachment, AppError> {
    let filename = field
        .file_name()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let content_type = field
        .content_type()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?
        .to_vec();

    Ok(FileAttachment {
        filename,
        content_type,
        data,
    })
}
