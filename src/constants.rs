// ABOUTME: Application constants organized by domain
// ABOUTME: Upstream endpoint defaults, pipeline limits, rate-limit defaults and safe error messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constants module
//!
//! Constants are grouped into logical domains: environment-derived endpoint
//! configuration, pipeline limits, and the user-safe message catalog.

use std::env;

/// Environment-based upstream endpoint configuration
pub mod env_config {
    use super::env;

    /// Get the Steam Web API base URL from environment or default
    #[must_use]
    pub fn steam_api_base() -> String {
        env::var("STEAM_API_BASE")
            .unwrap_or_else(|_| "https://api.steampowered.com".to_string())
    }

    /// Get the Steam Store API base URL from environment or default
    #[must_use]
    pub fn steam_store_base() -> String {
        env::var("STEAM_STORE_BASE")
            .unwrap_or_else(|_| "https://store.steampowered.com".to_string())
    }

    /// Get HTTP server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080)
    }
}

/// Pipeline limits for the recap aggregation
pub mod limits {
    /// Number of most-played games surfaced in the report
    pub const TOP_GAMES: usize = 10;

    /// Number of top-ranked games that receive achievement enrichment
    pub const ACHIEVEMENT_ENRICHED_GAMES: usize = 3;

    /// Maximum number of wishlist entries surfaced in the report
    pub const WISHLIST_PREVIEW_ITEMS: usize = 6;

    /// Default requests allowed per caller per rate-limit window
    pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 8;

    /// Default rate-limit window in seconds
    pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

    /// Request timeout for outbound Steam calls in seconds
    pub const UPSTREAM_REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout for outbound Steam calls in seconds
    pub const UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// User-safe message catalog
///
/// Only messages listed in [`messages::SAFE_ERROR_MESSAGES`] are surfaced to
/// callers verbatim; everything else is masked to
/// [`messages::GENERIC_FAILURE`].
pub mod messages {
    /// Request carried no usable identifier
    pub const MISSING_IDENTIFIER: &str = "Invalid. Please provide a Steam profile URL or ID";

    /// Vanity URL resolution transport failure
    pub const VANITY_RESOLUTION_FAILED: &str = "Failed to resolve vanity URL";

    /// Vanity URL resolution found no match
    pub const VANITY_NO_MATCH: &str = "Could not find a Steam profile matching that URL";

    /// Profile lookup transport failure
    pub const PROFILE_FETCH_FAILED: &str = "Failed to fetch Steam profile data";

    /// Profile lookup returned zero records
    pub const PROFILE_NOT_FOUND: &str = "Steam profile not found";

    /// Library lookup transport failure
    pub const LIBRARY_FETCH_FAILED: &str = "Failed to fetch Steam games library";

    /// Library payload omitted the games collection
    pub const LIBRARY_PRIVATE_OR_EMPTY: &str =
        "Game library is private or empty. Please set your Steam privacy settings to Public.";

    /// Rate limit gate rejection
    pub const RATE_LIMITED: &str = "Too many requests. Please try again in a minute.";

    /// Mask applied to any message not on the allow-list
    pub const GENERIC_FAILURE: &str = "Failed to fetch Steam data";

    /// Messages allowed to leave the service verbatim
    pub const SAFE_ERROR_MESSAGES: &[&str] = &[
        MISSING_IDENTIFIER,
        VANITY_RESOLUTION_FAILED,
        VANITY_NO_MATCH,
        PROFILE_FETCH_FAILED,
        PROFILE_NOT_FOUND,
        LIBRARY_FETCH_FAILED,
        LIBRARY_PRIVATE_OR_EMPTY,
        RATE_LIMITED,
    ];
}
