// ABOUTME: Pure transforms over a library snapshot: summary, ranking, genre accumulation
// ABOUTME: No I/O; ordering and tie-break rules live here and nowhere else
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::limits;
use crate::models::{GameSummary, GenreStat, LibraryGame, RankedGame};

/// Derive the ownership and playtime summary for a library snapshot.
///
/// `totalPlaytimeHours` is the rounded sum of raw minutes; an empty library
/// yields all-zero counts.
#[must_use]
pub fn summarize_library(game_count: u32, games: &[LibraryGame]) -> GameSummary {
    let played = games.iter().filter(|g| g.playtime_forever > 0).count();
    let total_minutes: u64 = games.iter().map(|g| g.playtime_forever).sum();

    GameSummary {
        total_games_owned: game_count,
        total_games_played: played as u32,
        total_playtime_hours: (total_minutes + 30) / 60,
    }
}

/// Rank the library by raw playtime minutes, descending, and truncate to the
/// top 10. The sort is stable: equal-playtime titles keep their original
/// relative order. Ranking on minutes rather than rounded hours avoids
/// rounding-induced tie reordering.
#[must_use]
pub fn rank_top_games(games: &[LibraryGame]) -> Vec<RankedGame> {
    let mut ranked: Vec<LibraryGame> = games.to_vec();
    ranked.sort_by(|a, b| b.playtime_forever.cmp(&a.playtime_forever));
    ranked.truncate(limits::TOP_GAMES);
    ranked.into_iter().map(RankedGame::from).collect()
}

/// Accumulate genre tags across the top-ranked titles.
///
/// Each title contributes +1 per genre tag it carries, not weighted by
/// playtime. `genre_sets` is one entry per title in rank order; titles whose
/// store lookup failed contribute an empty set. The tally is sorted by count
/// descending with ties kept in insertion order.
#[must_use]
pub fn tally_genres(genre_sets: &[Vec<String>]) -> Vec<GenreStat> {
    let mut tally: Vec<GenreStat> = Vec::new();

    for genres in genre_sets {
        for genre in genres {
            match tally.iter_mut().find(|stat| stat.name == *genre) {
                Some(stat) => stat.count += 1,
                None => tally.push(GenreStat {
                    name: genre.clone(),
                    count: 1,
                }),
            }
        }
    }

    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(appid: u32, minutes: u64) -> LibraryGame {
        LibraryGame {
            appid,
            name: format!("Game {appid}"),
            playtime_forever: minutes,
            img_icon_url: String::new(),
        }
    }

    #[test]
    fn test_summary_rounds_minutes_to_hours() {
        let games = vec![game(1, 90), game(2, 29), game(3, 0)];
        let summary = summarize_library(3, &games);
        // 119 minutes rounds to 2 hours.
        assert_eq!(summary.total_playtime_hours, 2);
        assert_eq!(summary.total_games_owned, 3);
        assert_eq!(summary.total_games_played, 2);
    }

    #[test]
    fn test_summary_rounds_half_up() {
        let games = vec![game(1, 30)];
        assert_eq!(summarize_library(1, &games).total_playtime_hours, 1);
        let games = vec![game(1, 29)];
        assert_eq!(summarize_library(1, &games).total_playtime_hours, 0);
    }

    #[test]
    fn test_summary_of_empty_library_is_all_zero() {
        let summary = summarize_library(0, &[]);
        assert_eq!(
            summary,
            GameSummary {
                total_games_owned: 0,
                total_games_played: 0,
                total_playtime_hours: 0,
            }
        );
    }

    #[test]
    fn test_ranking_sorts_descending_and_truncates() {
        let games: Vec<LibraryGame> = (0..15).map(|i| game(i, u64::from(i) * 10)).collect();
        let ranked = rank_top_games(&games);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].appid, 14);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].playtime_forever >= w[1].playtime_forever));
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let games = vec![game(7, 100), game(3, 100), game(9, 100), game(1, 200)];
        let ranked = rank_top_games(&games);
        let ids: Vec<u32> = ranked.iter().map(|g| g.appid).collect();
        // Equal-playtime titles retain original collection order.
        assert_eq!(ids, vec![1, 7, 3, 9]);
    }

    #[test]
    fn test_ranking_shorter_than_cap() {
        let games = vec![game(1, 5), game(2, 10)];
        assert_eq!(rank_top_games(&games).len(), 2);
    }

    #[test]
    fn test_ranking_does_not_touch_achievements() {
        let ranked = rank_top_games(&[game(1, 5)]);
        assert!(ranked[0].achievements_unlocked.is_none());
    }

    #[test]
    fn test_genre_tally_counts_presence_per_title() {
        let sets = vec![
            vec!["Action".to_owned(), "RPG".to_owned()],
            vec!["Action".to_owned()],
            vec![], // failed store lookup contributes nothing
            vec!["Indie".to_owned(), "Action".to_owned()],
        ];
        let tally = tally_genres(&sets);
        assert_eq!(tally[0], GenreStat { name: "Action".into(), count: 3 });
        // RPG and Indie are tied at 1; RPG was inserted first.
        assert_eq!(tally[1].name, "RPG");
        assert_eq!(tally[2].name, "Indie");
    }

    #[test]
    fn test_genre_tally_empty_input() {
        assert!(tally_genres(&[]).is_empty());
    }
}
