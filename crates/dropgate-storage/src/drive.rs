//! Google Drive v3 backend
//!
//! Folders are created with a JSON metadata POST; blobs are written through the
//! `uploadType=multipart` endpoint, which takes a `multipart/related` body carrying a
//! JSON metadata part followed by the media part.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::auth::{ServiceAccountKey, TokenSource};
use crate::traits::{BlobStore, Folder, StorageError, StorageResult};

const FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";
const UPLOAD_FILES_ENDPOINT: &str = "https://www.googleapis.com/upload/drive/v3/files";
const FOLDER_LINK_BASE: &str = "https://drive.google.com/drive/folders";
const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";
const RELATED_BOUNDARY: &str = "dropgate_related_4f9c2a17";

/// Created-object shape returned by the Drive API (narrowed by `fields=`).
#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

/// Drive-backed blob store.
pub struct DriveStore {
    http: reqwest::Client,
    tokens: TokenSource,
    files_endpoint: String,
    upload_endpoint: String,
}

impl DriveStore {
    pub fn new(key: ServiceAccountKey) -> StorageResult<Self> {
        let http = reqwest::Client::new();
        let tokens = TokenSource::new(key, http.clone())?;
        Ok(Self {
            http,
            tokens,
            files_endpoint: FILES_ENDPOINT.to_string(),
            upload_endpoint: UPLOAD_FILES_ENDPOINT.to_string(),
        })
    }

    async fn read_error_body(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        format!("{}: {}", status, body.trim())
    }
}

#[async_trait]
impl BlobStore for DriveStore {
    async fn create_folder(&self, name: &str, parent_id: &str) -> StorageResult<Folder> {
        let token = self.tokens.token().await?;

        let metadata = json!({
            "name": name,
            "mimeType": FOLDER_MIME_TYPE,
            "parents": [parent_id],
        });

        let response = self
            .http
            .post(&self.files_endpoint)
            .query(&[("fields", "id, name")])
            .bearer_auth(token)
            .json(&metadata)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::CreateFolderFailed(
                Self::read_error_body(response).await,
            ));
        }

        let file: DriveFile = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(format!("Invalid folder response: {}", e)))?;

        Ok(Folder {
            name: file.name.unwrap_or_else(|| name.to_string()),
            id: file.id,
        })
    }

    async fn write_blob(
        &self,
        name: &str,
        content_type: &str,
        folder_id: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let token = self.tokens.token().await?;

        let metadata = json!({
            "name": name,
            "parents": [folder_id],
        })
        .to_string();
        let body = related_body(&metadata, content_type, &data);

        let response = self
            .http
            .post(&self.upload_endpoint)
            .query(&[("uploadType", "multipart"), ("fields", "id")])
            .bearer_auth(token)
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/related; boundary={}", RELATED_BOUNDARY),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StorageError::UploadFailed(
                Self::read_error_body(response).await,
            ));
        }

        let file: DriveFile = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(format!("Invalid upload response: {}", e)))?;

        Ok(file.id)
    }

    fn folder_url(&self, folder_id: &str) -> Option<String> {
        Some(drive_folder_url(folder_id))
    }
}

/// Browsable link for a Drive folder, embedded in notification emails.
fn drive_folder_url(folder_id: &str) -> String {
    format!("{}/{}", FOLDER_LINK_BASE, folder_id)
}

/// Assemble the `multipart/related` body: JSON metadata part, then the media part.
fn related_body(metadata: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(metadata.len() + data.len() + 256);
    body.extend_from_slice(format!("--{}\r\n", RELATED_BOUNDARY).as_bytes());
    body.extend_from_slice(b"Content-Type: application/json; charset=UTF-8\r\n\r\n");
    body.extend_from_slice(metadata.as_bytes());
    body.extend_from_slice(format!("\r\n--{}\r\n", RELATED_BOUNDARY).as_bytes());
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", RELATED_BOUNDARY).as_bytes());
    body
}
