// ABOUTME: Recap route handler - the single inbound entry point of the service
// ABOUTME: Applies the rate-limit gate, runs the pipeline and classifies the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recap aggregation route
//!
//! `GET /api/recap?steamUrl=<id-or-url>` returns the composite report as
//! JSON, or `{"error": "..."}` with a classified status. The rate-limit
//! gate is consulted before any pipeline work; a denied caller gets a 429
//! with standard rate-limit headers and the pipeline is never invoked.

use axum::extract::{ConnectInfo, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::HeaderMap;
use serde::Deserialize;
use std::net::SocketAddr;
use tracing::info;

use super::AppState;
use crate::constants::messages;
use crate::errors::{AppError, AppResult};
use crate::rate_limiting::create_rate_limit_headers;
use crate::recap::build_recap;

/// Recap routes implementation
pub struct RecapRoutes;

impl RecapRoutes {
    /// Create the recap route with its shared state
    pub fn routes(state: AppState) -> Router {
        Router::new()
            .route("/api/recap", get(recap_handler))
            .with_state(state)
    }
}

/// Query parameters for the recap endpoint
#[derive(Debug, Deserialize)]
pub struct RecapQuery {
    /// A Steam profile URL, vanity name, or bare SteamID64
    #[serde(rename = "steamUrl")]
    steam_url: Option<String>,
}

async fn recap_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    Query(query): Query<RecapQuery>,
) -> AppResult<Response> {
    let caller = caller_key(&headers, connect_info.map(|ConnectInfo(addr)| addr));

    let decision = state.limiter.check(&caller);
    if !decision.allowed {
        let mut response = AppError::rate_limited().into_response();
        response
            .headers_mut()
            .extend(create_rate_limit_headers(&decision));
        return Ok(response);
    }

    let steam_url = query
        .steam_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::invalid_input(messages::MISSING_IDENTIFIER))?;

    info!(caller = %caller, "building recap");
    let recap = build_recap(state.gateway.as_ref(), steam_url).await?;

    Ok(Json(recap).into_response())
}

/// Caller identity for the rate-limit gate: the first `X-Forwarded-For`
/// value when present, else the socket peer address.
fn caller_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_owned())
        .filter(|ip| !ip.is_empty())
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_owned())
}
