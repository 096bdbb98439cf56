// ABOUTME: Route module organization for the steam-recap HTTP surface
// ABOUTME: Shared application state and the top-level router assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the orchestrator; the composite router is assembled here
//! with tracing and CORS layers.

/// Health check and system status routes
pub mod health;
/// Recap aggregation route
pub mod recap;

pub use health::HealthRoutes;
pub use recap::RecapRoutes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::gateway::SteamApi;
use crate::rate_limiting::RateLimiter;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream gateway, trait-object so tests can substitute a mock
    pub gateway: Arc<dyn SteamApi>,
    /// Per-caller rate-limit gate
    pub limiter: Arc<RateLimiter>,
}

/// Assemble the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecapRoutes::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
