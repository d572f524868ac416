//! Dropgate core library
//!
//! Configuration, error taxonomy, domain models, and request validation shared by the
//! storage client and the HTTP API.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::{Config, DriveConfig, SmtpConfig, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{FileAttachment, StoredBlob, UploadRequest, UploadSession};
