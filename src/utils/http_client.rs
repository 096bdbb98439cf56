// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Provides a singleton client so each gateway call reuses pooled connections
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

use crate::constants::limits;

/// Global shared HTTP client
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client.
///
/// Every outbound Steam call is a single request/response round trip with no
/// retry; the bounded request and connect timeouts here are the only
/// backstop against a hung upstream.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(limits::UPSTREAM_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(limits::UPSTREAM_CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
