// ABOUTME: Domain models shared between the recap orchestrator and the HTTP surface
// ABOUTME: Wire shapes match the composite JSON contract consumed by the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain models for the recap composite
//!
//! These are the validated, outward-facing shapes. Raw upstream payloads are
//! deserialized into gateway-private DTOs and converted into these models at
//! the gateway boundary; nothing unvalidated crosses into the orchestrator.

use serde::{Deserialize, Serialize};

/// A Steam user's public profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name (persona name)
    pub alias: String,
    /// Full-size avatar URL
    pub avatar: String,
    /// Account creation time as unix seconds, absent for some profiles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timecreated: Option<i64>,
}

/// One owned title in a user's library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryGame {
    /// Steam application ID, unique within a library snapshot
    pub appid: u32,
    /// Title name
    pub name: String,
    /// Lifetime playtime in minutes
    pub playtime_forever: u64,
    /// Icon image hash used to build the icon URL client-side
    pub img_icon_url: String,
}

/// A user's full library snapshot
#[derive(Debug, Clone)]
pub struct Library {
    /// Owned title count as reported by Steam
    pub game_count: u32,
    /// Unordered collection of owned titles, keyed by appid
    pub games: Vec<LibraryGame>,
}

/// Aggregate ownership and playtime statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    /// Titles owned
    pub total_games_owned: u32,
    /// Titles with any recorded playtime
    pub total_games_played: u32,
    /// Total playtime rounded to whole hours
    pub total_playtime_hours: u64,
}

/// A top-ranked title, optionally enriched with an achievement count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedGame {
    pub appid: u32,
    pub name: String,
    /// Lifetime playtime in minutes; ranking sorts on this raw value
    pub playtime_forever: u64,
    pub img_icon_url: String,
    /// Unlocked achievement count, set only for the top 3 ranked titles
    #[serde(rename = "achievementsUnlocked", skip_serializing_if = "Option::is_none")]
    pub achievements_unlocked: Option<u32>,
}

impl From<LibraryGame> for RankedGame {
    fn from(game: LibraryGame) -> Self {
        Self {
            appid: game.appid,
            name: game.name,
            playtime_forever: game.playtime_forever,
            img_icon_url: game.img_icon_url,
            achievements_unlocked: None,
        }
    }
}

/// Occurrence count for one genre across the top-ranked titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreStat {
    pub name: String,
    pub count: u32,
}

/// One wishlist entry enriched with store metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistedGame {
    pub appid: u32,
    pub name: String,
    /// Store banner image URL (Steam's "header image")
    pub capsule_url: String,
}

/// The full composite returned on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recap {
    pub profile: PlayerProfile,
    pub summary: GameSummary,
    #[serde(rename = "topGames")]
    pub top_games: Vec<RankedGame>,
    #[serde(rename = "topGenres")]
    pub top_genres: Vec<GenreStat>,
    pub wishlist: Vec<WishlistedGame>,
}
