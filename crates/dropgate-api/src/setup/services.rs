//! Service construction and dependency injection

use std::sync::Arc;

use anyhow::{Context, Result};

use dropgate_core::Config;
use dropgate_storage::{BlobStore, DriveStore, ServiceAccountKey};

use crate::services::notifier::{Notifier, SmtpNotifier};
use crate::services::upload::UploadService;
use crate::state::{AppState, UploadLimits};

/// Build the authenticated clients and assemble the shared application state.
pub fn initialize_services(config: Config) -> Result<Arc<AppState>> {
    let key = ServiceAccountKey {
        client_email: config.drive.client_email.clone(),
        private_key: config.drive.private_key.clone(),
        token_uri: config.drive.token_uri.clone(),
    };
    let blob_store: Arc<dyn BlobStore> =
        Arc::new(DriveStore::new(key).context("Failed to initialize drive client")?);
    tracing::info!(
        parent_folder_id = %config.drive.parent_folder_id,
        "Drive blob store initialized"
    );

    let notifier: Option<Arc<dyn Notifier>> = match &config.smtp {
        Some(smtp) => Some(Arc::new(
            SmtpNotifier::from_config(smtp).context("Failed to initialize SMTP notifier")?,
        ) as Arc<dyn Notifier>),
        None => {
            tracing::warn!("SMTP not configured; upload notifications are disabled");
            None
        }
    };

    let uploader = UploadService::new(
        blob_store,
        notifier,
        config.drive.parent_folder_id.clone(),
        config.upload.default_recipient.clone(),
    );

    let limits = UploadLimits {
        max_files: config.upload.max_files_per_request,
        max_file_size: config.upload.max_file_size_bytes,
        allowed_content_types: config.upload.allowed_content_types.clone(),
    };

    let is_production = config.is_production();
    Ok(Arc::new(AppState {
        uploader,
        limits,
        config,
        is_production,
    }))
}
