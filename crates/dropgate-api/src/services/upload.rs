//! Upload orchestration
//!
//! One session per request: create the session folder, write each attachment in input
//! order, write the optional text note, then notify. Strictly sequential, no retries;
//! the first failure aborts the rest of the sequence and is reported verbatim. Blobs
//! written before a failure stay in the remote folder - there is no rollback.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use dropgate_core::{AppError, FileAttachment, StoredBlob, UploadRequest, UploadSession};
use dropgate_storage::{BlobStore, Folder};

use super::notifier::Notifier;

/// Name of the blob holding the request's text comment.
pub const TEXT_NOTE_FILENAME: &str = "comments.txt";
const NOTIFY_SUBJECT: &str = "File Upload Notification";

/// Upload orchestrator. Cheap to clone; shares the injected client handles.
#[derive(Clone)]
pub struct UploadService {
    blob_store: Arc<dyn BlobStore>,
    notifier: Option<Arc<dyn Notifier>>,
    parent_folder_id: String,
    default_recipient: Option<String>,
}

impl UploadService {
    pub fn new(
        blob_store: Arc<dyn BlobStore>,
        notifier: Option<Arc<dyn Notifier>>,
        parent_folder_id: String,
        default_recipient: Option<String>,
    ) -> Self {
        Self {
            blob_store,
            notifier,
            parent_folder_id,
            default_recipient,
        }
    }

    /// Run one upload session to completion.
    ///
    /// The folder name is the current UTC timestamp; uniqueness relies on timestamp
    /// granularity and the remote service's own behavior on duplicate names.
    pub async fn run(&self, request: UploadRequest) -> Result<UploadSession, AppError> {
        let UploadRequest {
            files,
            text,
            recipient,
        } = request;

        let folder_name = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        tracing::info!(
            folder_name = %folder_name,
            file_count = files.len(),
            "Starting upload session"
        );

        let folder = self
            .blob_store
            .create_folder(&folder_name, &self.parent_folder_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, folder_name = %folder_name, "Failed to create session folder");
                AppError::Storage(e.to_string())
            })?;

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            let FileAttachment {
                filename,
                content_type,
                data,
            } = file;
            let id = self
                .blob_store
                .write_blob(&filename, &content_type, &folder.id, data)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, filename = %filename, "Failed to write blob");
                    AppError::Storage(e.to_string())
                })?;
            tracing::info!(blob_id = %id, filename = %filename, "Blob stored");
            stored.push(StoredBlob { id, name: filename });
        }

        let text_file_id = match text {
            Some(note) if !note.trim().is_empty() => {
                let id = self
                    .blob_store
                    .write_blob(TEXT_NOTE_FILENAME, "text/plain", &folder.id, note.into_bytes())
                    .await
                    .map_err(|e| {
                        tracing::error!(error = %e, "Failed to write text note");
                        AppError::Storage(e.to_string())
                    })?;
                tracing::info!(blob_id = %id, "Text note stored");
                Some(id)
            }
            _ => {
                tracing::debug!("No text note provided, skipping");
                None
            }
        };

        let recipient = recipient
            .filter(|r| !r.trim().is_empty())
            .or_else(|| self.default_recipient.clone());
        if let Some(to) = recipient {
            self.notify(&to, &folder).await?;
        }

        Ok(UploadSession {
            folder_id: folder.id,
            folder_name: folder.name,
            files: stored,
            text_file_id,
        })
    }

    async fn notify(&self, to: &str, folder: &Folder) -> Result<(), AppError> {
        let notifier = self
            .notifier
            .as_deref()
            .ok_or_else(|| AppError::Notify("Mail transport is not configured".to_string()))?;

        let mut body = format!(
            "Your files and text have been uploaded to the folder: {}.",
            folder.name
        );
        if let Some(url) = self.blob_store.folder_url(&folder.id) {
            body.push_str(&format!(" You can access it here: {}.", url));
        }

        notifier
            .send(to, NOTIFY_SUBJECT, &body)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, recipient = %to, "Failed to send notification");
                AppError::Notify(e.to_string())
            })?;
        tracing::info!(recipient = %to, folder_name = %folder.name, "Session notification sent");
        Ok(())
    }
}
