//! Domain models for a single upload session.

/// One file part extracted from the incoming request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct FileAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl FileAttachment {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Validated payload of one incoming HTTP call, owned by the ingress handler until
/// handed to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// Attachments in the order they appeared in the request body.
    pub files: Vec<FileAttachment>,
    /// Optional plain-text comment; blank strings are treated as absent.
    pub text: Option<String>,
    /// Optional notification recipient address.
    pub recipient: Option<String>,
}

/// Per-file upload result: the remote blob id and the name it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub id: String,
    pub name: String,
}

/// Outcome of one orchestrated run. Lives only for the duration of the HTTP call;
/// the remote folder is the only durable artifact.
#[derive(Debug, Clone)]
pub struct UploadSession {
    pub folder_id: String,
    pub folder_name: String,
    pub files: Vec<StoredBlob>,
    pub text_file_id: Option<String>,
}
