// ABOUTME: Server binary for the steam-recap aggregation service
// ABOUTME: Loads environment configuration, initializes logging and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Steam Recap Server Binary
//!
//! Starts the HTTP service. Requires `STEAM_API_KEY` in the environment;
//! a missing key aborts startup before any request is served.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use steam_recap::{
    config::ServerConfig,
    gateway::SteamGateway,
    logging,
    rate_limiting::RateLimiter,
    routes::{self, AppState},
};
use tracing::info;

#[derive(Parser)]
#[command(name = "steam-recap-server")]
#[command(about = "Steam year-in-review aggregation service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting steam-recap server");
    info!("{}", config.summary());

    let state = AppState {
        gateway: Arc::new(SteamGateway::new(config.steam.clone())),
        limiter: Arc::new(RateLimiter::new(
            config.rate_limit.max_requests,
            config.rate_limit.window,
        )),
    };

    let app = routes::router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
