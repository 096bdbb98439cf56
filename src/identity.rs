// ABOUTME: Normalization of user-supplied Steam profile URLs and IDs
// ABOUTME: Pure string handling, no network access and no failure mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identifier normalization
//!
//! Users paste anything from a bare SteamID64 to a full profile URL with a
//! trailing slash. This module extracts the resolution token: strip one
//! trailing slash, take the final path segment if a separator remains, and
//! classify the result as an already-resolved ID iff it is exactly 17
//! decimal digits. Anything else is forwarded for vanity resolution.

/// A cleaned identifier token plus its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// The cleaned token: a SteamID64 or a vanity name
    pub token: String,
    /// True iff the token is already a resolved 17-digit SteamID64
    pub is_steam_id: bool,
}

/// Normalize free-form user input into a resolution token
#[must_use]
pub fn normalize_input(raw: &str) -> NormalizedInput {
    let cleaned = raw.strip_suffix('/').unwrap_or(raw);
    let token = match cleaned.rsplit_once('/') {
        Some((_, last)) => last,
        None => cleaned,
    };

    NormalizedInput {
        token: token.to_owned(),
        is_steam_id: is_steam_id64(token),
    }
}

/// True iff the token is exactly 17 decimal digits
fn is_steam_id64(token: &str) -> bool {
    token.len() == 17 && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_numeric_id_is_classified() {
        let input = normalize_input("76561197960287930");
        assert_eq!(input.token, "76561197960287930");
        assert!(input.is_steam_id);
    }

    #[test]
    fn test_profile_url_with_trailing_slash() {
        let input = normalize_input("https://platform.example/id/gaben/");
        assert_eq!(input.token, "gaben");
        assert!(!input.is_steam_id);
    }

    #[test]
    fn test_numeric_id_inside_url() {
        let input = normalize_input("https://steamcommunity.com/profiles/76561197960287930");
        assert_eq!(input.token, "76561197960287930");
        assert!(input.is_steam_id);
    }

    #[test]
    fn test_bare_vanity_name() {
        let input = normalize_input("gaben");
        assert_eq!(input.token, "gaben");
        assert!(!input.is_steam_id);
    }

    #[test]
    fn test_wrong_digit_count_is_not_an_id() {
        assert!(!normalize_input("1234567890123456").is_steam_id); // 16 digits
        assert!(!normalize_input("123456789012345678").is_steam_id); // 18 digits
    }

    #[test]
    fn test_mixed_digits_and_letters_is_not_an_id() {
        assert!(!normalize_input("7656119796028793a").is_steam_id);
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        // Two trailing slashes leave an empty final segment, which is
        // forwarded as-is and rejected later as missing input.
        let input = normalize_input("https://steamcommunity.com/id/gaben//");
        assert_eq!(input.token, "");
        assert!(!input.is_steam_id);
    }
}
