// ABOUTME: Steam Web API and Store API integration with boundary-validated response shapes
// ABOUTME: Converts raw upstream JSON into domain models, one outbound round trip per operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::{AppDetails, SteamApi, WishlistRef};
use crate::constants::{env_config, messages};
use crate::errors::{AppError, AppResult};
use crate::models::{Library, LibraryGame, PlayerProfile};
use crate::utils::http_client::shared_client;

/// Configuration for Steam API integration
#[derive(Debug, Clone)]
pub struct SteamConfig {
    /// Steam Web API key
    pub api_key: String,
    /// Web API base URL
    pub api_base: String,
    /// Store API base URL
    pub store_base: String,
}

impl SteamConfig {
    /// Build a config from the given key and the environment-derived base URLs
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base: env_config::steam_api_base(),
            store_base: env_config::steam_store_base(),
        }
    }
}

/// Typed client for the Steam Web API and Store API
pub struct SteamGateway {
    client: Client,
    config: SteamConfig,
}

impl SteamGateway {
    #[must_use]
    pub fn new(config: SteamConfig) -> Self {
        Self {
            client: shared_client().clone(),
            config,
        }
    }

    #[must_use]
    pub fn with_client(config: SteamConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Best-effort achievement lookup, separated so the trait impl can
    /// collapse every failure path to `None` in one place.
    async fn try_fetch_achievements(&self, app_id: u32, steam_id: &str) -> Option<u32> {
        let url = format!(
            "{}/ISteamUserStats/GetPlayerAchievements/v0001/",
            self.config.api_base
        );
        let response = self
            .client
            .get(&url)
            .query(&[
                ("appid", app_id.to_string()),
                ("key", self.config.api_key.clone()),
                ("steamid", steam_id.to_owned()),
            ])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let payload: AchievementsResponse = response.json().await.ok()?;
        let stats = payload.playerstats?;
        if !stats.success.unwrap_or(false) {
            return None;
        }

        let achievements = stats.achievements?;
        let unlocked = achievements.iter().filter(|a| a.achieved == 1).count();
        u32::try_from(unlocked).ok()
    }

    async fn try_fetch_app_details(&self, app_id: u32) -> Option<AppDetails> {
        let url = format!("{}/api/appdetails", self.config.store_base);
        let response = self
            .client
            .get(&url)
            .query(&[("appids", app_id.to_string())])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        // The store keys the payload by the requested appid as a string.
        let mut payload: HashMap<String, AppDetailsEntry> = response.json().await.ok()?;
        let entry = payload.remove(&app_id.to_string())?;
        if !entry.success {
            return None;
        }

        let data = entry.data?;
        Some(AppDetails {
            name: data.name,
            header_image: data.header_image,
            genres: data
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.description)
                .collect(),
        })
    }

    async fn try_fetch_wishlist(&self, steam_id: &str) -> Option<Vec<WishlistRef>> {
        let url = format!(
            "{}/IWishlistService/GetWishlist/v1/",
            self.config.api_base
        );
        let response = self
            .client
            .get(&url)
            .query(&[("steamid", steam_id)])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let payload: WishlistResponse = response.json().await.ok()?;
        let items = payload.response?.items.unwrap_or_default();
        Some(
            items
                .into_iter()
                .map(|item| WishlistRef { appid: item.appid })
                .collect(),
        )
    }
}

#[async_trait]
impl SteamApi for SteamGateway {
    async fn resolve_vanity_url(&self, vanity: &str) -> AppResult<String> {
        let url = format!("{}/ISteamUser/ResolveVanityURL/v0001/", self.config.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str()), ("vanityurl", vanity)])
            .send()
            .await
            .map_err(|e| {
                AppError::upstream_unavailable(messages::VANITY_RESOLUTION_FAILED).with_source(e)
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "vanity resolution returned non-success status");
            return Err(AppError::upstream_unavailable(
                messages::VANITY_RESOLUTION_FAILED,
            ));
        }

        let payload: VanityResponse = response.json().await.map_err(|e| {
            AppError::upstream_unavailable(messages::VANITY_RESOLUTION_FAILED).with_source(e)
        })?;

        // Steam reports success=1 for a match and success=42 for no match.
        if payload.response.success != 1 {
            return Err(AppError::unresolvable(messages::VANITY_NO_MATCH));
        }

        payload
            .response
            .steamid
            .ok_or_else(|| AppError::unresolvable(messages::VANITY_NO_MATCH))
    }

    async fn fetch_player_summary(&self, steam_id: &str) -> AppResult<PlayerProfile> {
        let url = format!(
            "{}/ISteamUser/GetPlayerSummaries/v0002/",
            self.config.api_base
        );
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str()), ("steamids", steam_id)])
            .send()
            .await
            .map_err(|e| {
                AppError::upstream_unavailable(messages::PROFILE_FETCH_FAILED).with_source(e)
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "profile lookup returned non-success status");
            return Err(AppError::upstream_unavailable(messages::PROFILE_FETCH_FAILED));
        }

        let payload: PlayerSummariesResponse = response.json().await.map_err(|e| {
            AppError::upstream_unavailable(messages::PROFILE_FETCH_FAILED).with_source(e)
        })?;

        let player = payload
            .response
            .players
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(messages::PROFILE_NOT_FOUND))?;

        Ok(PlayerProfile {
            alias: player.personaname,
            avatar: player.avatarfull,
            timecreated: player.timecreated,
        })
    }

    async fn fetch_owned_games(&self, steam_id: &str) -> AppResult<Library> {
        let url = format!(
            "{}/IPlayerService/GetOwnedGames/v0001/",
            self.config.api_base
        );
        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("steamid", steam_id),
                ("include_appinfo", "1"),
                ("include_played_free_games", "1"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::upstream_unavailable(messages::LIBRARY_FETCH_FAILED).with_source(e)
            })?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "library lookup returned non-success status");
            return Err(AppError::upstream_unavailable(messages::LIBRARY_FETCH_FAILED));
        }

        let payload: OwnedGamesResponse = response.json().await.map_err(|e| {
            AppError::upstream_unavailable(messages::LIBRARY_FETCH_FAILED).with_source(e)
        })?;

        // An absent games collection is Steam's signal for a private or
        // inaccessible library. A present-but-empty list is a valid result.
        let body = payload
            .response
            .ok_or_else(|| AppError::private_or_empty(messages::LIBRARY_PRIVATE_OR_EMPTY))?;
        let games = body
            .games
            .ok_or_else(|| AppError::private_or_empty(messages::LIBRARY_PRIVATE_OR_EMPTY))?;

        Ok(Library {
            game_count: body.game_count.unwrap_or_else(|| games.len() as u32),
            games: games
                .into_iter()
                .map(|g| LibraryGame {
                    appid: g.appid,
                    name: g.name,
                    playtime_forever: g.playtime_forever,
                    img_icon_url: g.img_icon_url,
                })
                .collect(),
        })
    }

    async fn fetch_achievements(&self, app_id: u32, steam_id: &str) -> Option<u32> {
        let result = self.try_fetch_achievements(app_id, steam_id).await;
        if result.is_none() {
            debug!(app_id, "achievement lookup yielded no usable data");
        }
        result
    }

    async fn fetch_app_details(&self, app_id: u32) -> Option<AppDetails> {
        let result = self.try_fetch_app_details(app_id).await;
        if result.is_none() {
            debug!(app_id, "store details lookup yielded no usable data");
        }
        result
    }

    async fn fetch_wishlist(&self, steam_id: &str) -> Option<Vec<WishlistRef>> {
        self.try_fetch_wishlist(steam_id).await
    }
}

#[derive(Debug, Deserialize)]
struct VanityResponse {
    response: VanityBody,
}

#[derive(Debug, Deserialize)]
struct VanityBody {
    success: i64,
    steamid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerSummariesResponse {
    response: PlayerSummariesBody,
}

#[derive(Debug, Deserialize)]
struct PlayerSummariesBody {
    #[serde(default)]
    players: Vec<RawPlayer>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    personaname: String,
    avatarfull: String,
    timecreated: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesResponse {
    response: Option<OwnedGamesBody>,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesBody {
    game_count: Option<u32>,
    games: Option<Vec<RawGame>>,
}

#[derive(Debug, Deserialize)]
struct RawGame {
    appid: u32,
    name: String,
    playtime_forever: u64,
    #[serde(default)]
    img_icon_url: String,
}

#[derive(Debug, Deserialize)]
struct AchievementsResponse {
    playerstats: Option<PlayerStatsBody>,
}

#[derive(Debug, Deserialize)]
struct PlayerStatsBody {
    success: Option<bool>,
    achievements: Option<Vec<RawAchievement>>,
}

#[derive(Debug, Deserialize)]
struct RawAchievement {
    achieved: u8,
}

#[derive(Debug, Deserialize)]
struct AppDetailsEntry {
    #[serde(default)]
    success: bool,
    data: Option<RawAppData>,
}

#[derive(Debug, Deserialize)]
struct RawAppData {
    name: String,
    header_image: Option<String>,
    genres: Option<Vec<RawGenre>>,
}

#[derive(Debug, Deserialize)]
struct RawGenre {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WishlistResponse {
    response: Option<WishlistBody>,
}

#[derive(Debug, Deserialize)]
struct WishlistBody {
    items: Option<Vec<RawWishlistItem>>,
}

#[derive(Debug, Deserialize)]
struct RawWishlistItem {
    appid: u32,
}
