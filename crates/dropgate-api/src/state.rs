//! Application state
//!
//! The authenticated client handles are injected here at startup instead of living in
//! process-wide globals, so tests can substitute recording fakes.

use dropgate_core::Config;

use crate::services::upload::UploadService;

/// Limits and allow-list applied by the ingress handler before the orchestrator runs.
#[derive(Clone, Debug)]
pub struct UploadLimits {
    pub max_files: usize,
    pub max_file_size: usize,
    pub allowed_content_types: Vec<String>,
}

/// Main application state shared by all requests. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub uploader: UploadService,
    pub limits: UploadLimits,
    pub config: Config,
    pub is_production: bool,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
