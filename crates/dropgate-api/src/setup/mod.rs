//! Application setup and initialization
//!
//! All wiring lives here so `main` stays thin and tests can assemble the router with
//! fakes instead of the real collaborators.

pub mod routes;
pub mod server;
pub mod services;

use std::sync::Arc;

use anyhow::{Context, Result};

use dropgate_core::Config;

use crate::state::AppState;

/// Initialize the entire application: services, state, and routes.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let state =
        services::initialize_services(config).context("Failed to initialize services")?;
    let router = routes::setup_routes(state.clone())?;
    Ok((state, router))
}
