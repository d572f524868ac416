//! Dropgate API Library
//!
//! This crate provides the HTTP upload endpoint, the upload orchestrator, the SMTP
//! notifier, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod utils;

// Public modules
pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
