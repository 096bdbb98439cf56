// ABOUTME: Gateway module defining the typed upstream interface for Steam reads
// ABOUTME: The SteamApi trait is the seam between the orchestrator and the real HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Upstream Gateway
//!
//! One operation per upstream read, each with its own contract. Mandatory
//! operations (identity resolution, profile, library) return `AppResult` and
//! abort the request on failure. Best-effort operations (achievements, store
//! details, wishlist) return `Option` and never propagate an error: the
//! degrade-to-default mapping is centralized here so the orchestrator never
//! catches anything ad hoc.
//!
//! Raw upstream JSON never crosses this boundary. Each response shape has a
//! private serde DTO in [`steam`] and is converted to a validated domain
//! model before being handed to the caller.

/// Steam Web API / Store API client implementation
pub mod steam;

pub use steam::{SteamConfig, SteamGateway};

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{Library, PlayerProfile};

/// Validated store metadata for one title
#[derive(Debug, Clone)]
pub struct AppDetails {
    /// Store-listed title name
    pub name: String,
    /// Banner ("header") image URL, absent for some listings
    pub header_image: Option<String>,
    /// Genre tag descriptions, empty when the listing carries none
    pub genres: Vec<String>,
}

/// One raw wishlist entry, upstream order preserved
#[derive(Debug, Clone, Copy)]
pub struct WishlistRef {
    pub appid: u32,
}

/// The upstream read operations consumed by the recap orchestrator
#[async_trait]
pub trait SteamApi: Send + Sync {
    /// Resolve a vanity name to a SteamID64.
    ///
    /// Skipped entirely by the orchestrator when the normalizer already
    /// produced a numeric ID.
    ///
    /// # Errors
    ///
    /// `Unresolvable` when Steam reports no match, `UpstreamUnavailable` on
    /// transport failure or a non-success HTTP status.
    async fn resolve_vanity_url(&self, vanity: &str) -> AppResult<String>;

    /// Fetch the public profile for a SteamID64.
    ///
    /// # Errors
    ///
    /// `NotFound` when Steam returns zero player records,
    /// `UpstreamUnavailable` on transport failure.
    async fn fetch_player_summary(&self, steam_id: &str) -> AppResult<PlayerProfile>;

    /// Fetch the owned-games library for a SteamID64.
    ///
    /// # Errors
    ///
    /// `PrivateOrEmpty` when the payload omits the games collection (Steam's
    /// documented signal for a private or empty account - distinct from a
    /// present-but-empty list, which succeeds), `UpstreamUnavailable` on
    /// transport failure.
    async fn fetch_owned_games(&self, steam_id: &str) -> AppResult<Library>;

    /// Count unlocked achievements for one title. Best-effort: any failure
    /// (transport, malformed payload, title without an achievement schema)
    /// yields `None`.
    async fn fetch_achievements(&self, app_id: u32, steam_id: &str) -> Option<u32>;

    /// Fetch store metadata for one title. Best-effort: `None` on any
    /// failure or when the store reports no success for the listing.
    async fn fetch_app_details(&self, app_id: u32) -> Option<AppDetails>;

    /// Fetch the raw wishlist. Best-effort: `None` on any failure; an absent
    /// items collection is an empty wishlist, not an error.
    async fn fetch_wishlist(&self, steam_id: &str) -> Option<Vec<WishlistRef>>;
}
