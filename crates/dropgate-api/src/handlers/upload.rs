use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use dropgate_core::{validation, AppError};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload_request;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub folder_id: String,
    pub folder_name: String,
    /// Present in legacy single-file mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    /// Present in legacy single-file mode only, when a text note was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_file_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    responses(
        (status = 200, description = "Files uploaded successfully", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Downstream storage or notification failure", body = ErrorResponse)
    )
)]
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let extracted = extract_upload_request(multipart, state.limits.max_files).await?;

    // Validation short-circuits before any remote call
    if extracted.request.files.is_empty() {
        return Err(AppError::InvalidInput("No files uploaded.".to_string()).into());
    }
    for file in &extracted.request.files {
        validation::validate_attachment(
            file,
            state.limits.max_file_size,
            &state.limits.allowed_content_types,
        )?;
    }

    let single_file_mode = extracted.single_file_mode;
    let session = state.uploader.run(extracted.request).await?;

    Ok(Json(UploadResponse {
        message: "Files uploaded successfully!".to_string(),
        file_id: single_file_mode
            .then(|| session.files.first().map(|blob| blob.id.clone()))
            .flatten(),
        text_file_id: if single_file_mode {
            session.text_file_id
        } else {
            None
        },
        folder_id: session.folder_id,
        folder_name: session.folder_name,
    }))
}
