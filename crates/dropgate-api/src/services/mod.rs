//! Application services: the upload orchestrator and the email notifier.

pub mod notifier;
pub mod upload;
