// ABOUTME: The recap aggregation orchestrator - sequential mandatory phase then concurrent enrichment
// ABOUTME: Enrichment branch failures degrade to defaults here and never fail the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Aggregation Orchestrator
//!
//! Runs the recap pipeline for one request:
//!
//! 1. normalize the input token
//! 2. resolve the vanity name if needed (fatal on failure)
//! 3. fetch profile, then library, sequentially (fatal on failure)
//! 4. derive the summary and top-10 ranking (pure)
//! 5. run the three enrichment branches concurrently - achievements for the
//!    top 3, genre tags for the top 10, and the wishlist preview - none of
//!    which may fail the request
//! 6. join and assemble the composite
//!
//! Per-title calls inside a branch fan out in parallel as well; the worst
//! case is the top-10 set size, so no explicit concurrency cap is applied.

/// Pure transforms over the library snapshot
pub mod transform;

use futures_util::future::join_all;
use tracing::{debug, info};

use crate::constants::{limits, messages};
use crate::errors::{AppError, AppResult};
use crate::gateway::SteamApi;
use crate::identity::normalize_input;
use crate::models::{GenreStat, RankedGame, Recap, WishlistedGame};
use self::transform::{rank_top_games, summarize_library, tally_genres};

/// Build the full recap composite for one user-supplied identifier.
///
/// # Errors
///
/// Fails only on the mandatory path: `InvalidInput` for a blank token,
/// `Unresolvable`/`UpstreamUnavailable` from identity resolution,
/// `NotFound`/`UpstreamUnavailable` from the profile lookup, and
/// `PrivateOrEmpty`/`UpstreamUnavailable` from the library lookup.
pub async fn build_recap(gateway: &dyn SteamApi, raw_input: &str) -> AppResult<Recap> {
    let input = normalize_input(raw_input);
    if input.token.is_empty() {
        return Err(AppError::invalid_input(messages::MISSING_IDENTIFIER));
    }

    let steam_id = if input.is_steam_id {
        input.token
    } else {
        gateway.resolve_vanity_url(&input.token).await?
    };

    let profile = gateway.fetch_player_summary(&steam_id).await?;
    let library = gateway.fetch_owned_games(&steam_id).await?;
    info!(
        games = library.games.len(),
        "library fetched, starting enrichment"
    );

    let summary = summarize_library(library.game_count, &library.games);
    let mut top_games = rank_top_games(&library.games);

    let (achievement_counts, top_genres, wishlist) = tokio::join!(
        fetch_top_achievements(gateway, &top_games, &steam_id),
        compile_top_genres(gateway, &top_games),
        compile_wishlist(gateway, &steam_id),
    );

    // Only the top 3 titles carry the field at all; a failed lookup still
    // records an attempt as zero.
    for (game, count) in top_games.iter_mut().zip(achievement_counts) {
        game.achievements_unlocked = Some(count);
    }

    Ok(Recap {
        profile,
        summary,
        top_games,
        top_genres,
        wishlist,
    })
}

/// Achievement enrichment branch: unlocked counts for the top 3 ranked
/// titles, fetched in parallel. Returns one count per attempted title, in
/// rank order, with failures degraded to zero.
async fn fetch_top_achievements(
    gateway: &dyn SteamApi,
    top_games: &[RankedGame],
    steam_id: &str,
) -> Vec<u32> {
    let lookups = top_games
        .iter()
        .take(limits::ACHIEVEMENT_ENRICHED_GAMES)
        .map(|game| gateway.fetch_achievements(game.appid, steam_id));

    join_all(lookups)
        .await
        .into_iter()
        .map(|count| count.unwrap_or(0))
        .collect()
}

/// Genre enrichment branch: store details for every top-ranked title in
/// parallel, tallied by per-title presence. A failed lookup contributes
/// nothing and never fails the branch.
async fn compile_top_genres(gateway: &dyn SteamApi, top_games: &[RankedGame]) -> Vec<GenreStat> {
    let lookups = top_games.iter().map(|game| gateway.fetch_app_details(game.appid));

    let genre_sets: Vec<Vec<String>> = join_all(lookups)
        .await
        .into_iter()
        .map(|details| details.map(|d| d.genres).unwrap_or_default())
        .collect();

    tally_genres(&genre_sets)
}

/// Wishlist enrichment branch: the first 6 items of the upstream-ordered
/// wishlist, each enriched with store details in parallel. Items whose
/// lookup fails or lacks a banner image are dropped, not replaced.
async fn compile_wishlist(gateway: &dyn SteamApi, steam_id: &str) -> Vec<WishlistedGame> {
    let Some(items) = gateway.fetch_wishlist(steam_id).await else {
        debug!("wishlist unavailable, returning empty preview");
        return Vec::new();
    };

    let preview: Vec<u32> = items
        .iter()
        .take(limits::WISHLIST_PREVIEW_ITEMS)
        .map(|item| item.appid)
        .collect();

    let lookups = preview.iter().map(|&appid| gateway.fetch_app_details(appid));

    join_all(lookups)
        .await
        .into_iter()
        .zip(preview)
        .filter_map(|(details, appid)| {
            let details = details?;
            Some(WishlistedGame {
                appid,
                name: details.name,
                capsule_url: details.header_image?,
            })
        })
        .collect()
}
