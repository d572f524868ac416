//! Remote blob storage client
//!
//! Defines the `BlobStore` trait the upload orchestrator works against, and the Google
//! Drive implementation used in production: folder creation and blob writes over the
//! Drive v3 REST API, authenticated with a service-account JWT-bearer grant.

mod auth;
mod drive;
mod traits;

pub use auth::{ServiceAccountKey, TokenSource};
pub use drive::DriveStore;
pub use traits::{BlobStore, Folder, StorageError, StorageResult};
