//! Storage abstraction trait
//!
//! The orchestrator depends only on this narrow interface, so tests can substitute a
//! recording fake and production can use the Drive backend.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Folder creation failed: {0}")]
    CreateFolderFailed(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response from storage backend: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A remote folder created for one upload session. Externally owned; this system only
/// creates it, never reads or deletes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
}

/// Remote blob storage abstraction.
///
/// Every successful call durably creates a remote object; there is no compensating
/// delete anywhere in this system.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Create a folder under `parent_id` and return its identifier.
    async fn create_folder(&self, name: &str, parent_id: &str) -> StorageResult<Folder>;

    /// Write a blob into an existing folder and return the created blob's id.
    async fn write_blob(
        &self,
        name: &str,
        content_type: &str,
        folder_id: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Browsable URL for a created folder, when the backend has one. Used only to
    /// enrich notification bodies.
    fn folder_url(&self, _folder_id: &str) -> Option<String> {
        None
    }
}
