//! Recording fakes for the blob store and the mail transport.

use std::sync::Mutex;

use async_trait::async_trait;

use dropgate_api::services::notifier::{Notifier, NotifyError};
use dropgate_storage::{BlobStore, Folder, StorageError, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    CreateFolder {
        name: String,
        parent: String,
    },
    WriteBlob {
        name: String,
        content_type: String,
        folder_id: String,
        data: Vec<u8>,
    },
}

/// Records every call; configurable to fail folder creation or the n-th blob write.
#[derive(Default)]
pub struct RecordingStore {
    pub calls: Mutex<Vec<StoreCall>>,
    pub fail_create_folder: bool,
    pub fail_write_at: Option<usize>,
}

impl RecordingStore {
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().expect("store lock").clone()
    }

    pub fn write_calls(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, StoreCall::WriteBlob { .. }))
            .collect()
    }
}

#[async_trait]
impl BlobStore for RecordingStore {
    async fn create_folder(&self, name: &str, parent_id: &str) -> StorageResult<Folder> {
        self.calls
            .lock()
            .expect("store lock")
            .push(StoreCall::CreateFolder {
                name: name.to_string(),
                parent: parent_id.to_string(),
            });
        if self.fail_create_folder {
            return Err(StorageError::CreateFolderFailed(
                "403: permission denied".to_string(),
            ));
        }
        Ok(Folder {
            id: "folder-1".to_string(),
            name: name.to_string(),
        })
    }

    async fn write_blob(
        &self,
        name: &str,
        content_type: &str,
        folder_id: &str,
        data: Vec<u8>,
    ) -> StorageResult<String> {
        let mut calls = self.calls.lock().expect("store lock");
        let write_index = calls
            .iter()
            .filter(|c| matches!(c, StoreCall::WriteBlob { .. }))
            .count();
        calls.push(StoreCall::WriteBlob {
            name: name.to_string(),
            content_type: content_type.to_string(),
            folder_id: folder_id.to_string(),
            data,
        });
        if self.fail_write_at == Some(write_index) {
            return Err(StorageError::UploadFailed(
                "503: backend unavailable".to_string(),
            ));
        }
        Ok(format!("blob-{}", write_index + 1))
    }

    fn folder_url(&self, folder_id: &str) -> Option<String> {
        Some(format!("https://files.example.com/folders/{}", folder_id))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String, String)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        self.sent.lock().expect("notifier lock").push((
            to.to_string(),
            subject.to_string(),
            body.to_string(),
        ));
        if self.fail {
            return Err(NotifyError::Transport("535 bad credentials".to_string()));
        }
        Ok(())
    }
}
