// ABOUTME: Router-level tests for the recap HTTP surface
// ABOUTME: Verifies the rate-limit gate, input validation, error masking and the success wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use axum::body::Body;
use http::{Request, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use steam_recap::constants::messages;
use steam_recap::errors::{AppError, AppResult};
use steam_recap::gateway::{AppDetails, SteamApi, WishlistRef};
use steam_recap::models::{Library, LibraryGame, PlayerProfile};
use steam_recap::rate_limiting::RateLimiter;
use steam_recap::routes::{router, AppState};

/// Minimal gateway: one owned game, everything else absent. Counts profile
/// fetches so tests can assert the pipeline was (not) invoked.
#[derive(Default)]
struct StubSteam {
    profile_calls: AtomicUsize,
    fail_profile_with: Option<fn() -> AppError>,
}

#[async_trait]
impl SteamApi for StubSteam {
    async fn resolve_vanity_url(&self, _vanity: &str) -> AppResult<String> {
        Ok("76561197960287930".to_owned())
    }

    async fn fetch_player_summary(&self, _steam_id: &str) -> AppResult<PlayerProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(make_error) = self.fail_profile_with {
            return Err(make_error());
        }
        Ok(PlayerProfile {
            alias: "gaben".into(),
            avatar: "https://avatars.example/full.jpg".into(),
            timecreated: None,
        })
    }

    async fn fetch_owned_games(&self, _steam_id: &str) -> AppResult<Library> {
        Ok(Library {
            game_count: 1,
            games: vec![LibraryGame {
                appid: 570,
                name: "Dota 2".into(),
                playtime_forever: 90,
                img_icon_url: "icon".into(),
            }],
        })
    }

    async fn fetch_achievements(&self, _app_id: u32, _steam_id: &str) -> Option<u32> {
        None
    }

    async fn fetch_app_details(&self, _app_id: u32) -> Option<AppDetails> {
        None
    }

    async fn fetch_wishlist(&self, _steam_id: &str) -> Option<Vec<WishlistRef>> {
        None
    }
}

fn app_with(gateway: Arc<StubSteam>, limiter: RateLimiter) -> axum::Router {
    router(AppState {
        gateway,
        limiter: Arc::new(limiter),
    })
}

fn recap_request(query: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/recap{query}"))
        .header("x-forwarded-for", "203.0.113.9")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_identifier_is_a_400() {
    let app = app_with(Arc::new(StubSteam::default()), RateLimiter::default());

    let response = app.oneshot(recap_request("")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], messages::MISSING_IDENTIFIER);
}

#[tokio::test]
async fn blank_identifier_is_a_400() {
    let app = app_with(Arc::new(StubSteam::default()), RateLimiter::default());

    let response = app
        .oneshot(recap_request("?steamUrl=%20%20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rate_limited_caller_never_reaches_the_pipeline() {
    let gateway = Arc::new(StubSteam::default());
    let app = app_with(
        Arc::clone(&gateway),
        RateLimiter::new(1, Duration::from_secs(60)),
    );

    let first = app
        .clone()
        .oneshot(recap_request("?steamUrl=76561197960287930"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(recap_request("?steamUrl=76561197960287930"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(second.headers().contains_key("Retry-After"));

    let json = body_json(second).await;
    assert_eq!(json["error"], messages::RATE_LIMITED);

    // The pipeline ran once, for the allowed request only.
    assert_eq!(gateway.profile_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn different_callers_have_independent_limits() {
    let app = app_with(
        Arc::new(StubSteam::default()),
        RateLimiter::new(1, Duration::from_secs(60)),
    );

    let first = app
        .clone()
        .oneshot(recap_request("?steamUrl=76561197960287930"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let other_caller = Request::builder()
        .uri("/api/recap?steamUrl=76561197960287930")
        .header("x-forwarded-for", "198.51.100.4")
        .body(Body::empty())
        .unwrap();
    let second = app.oneshot(other_caller).await.unwrap();
    assert_eq!(second.status(), StatusCode::OK);
}

#[tokio::test]
async fn success_returns_the_composite_wire_shape() {
    let app = app_with(Arc::new(StubSteam::default()), RateLimiter::default());

    let response = app
        .oneshot(recap_request("?steamUrl=76561197960287930"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["profile"]["alias"], "gaben");
    assert_eq!(json["summary"]["totalGamesOwned"], 1);
    assert_eq!(json["summary"]["totalGamesPlayed"], 1);
    // 90 minutes rounds to 2 hours.
    assert_eq!(json["summary"]["totalPlaytimeHours"], 2);
    assert_eq!(json["topGames"][0]["appid"], 570);
    // The single title is in the top 3: attempted enrichment degraded to 0.
    assert_eq!(json["topGames"][0]["achievementsUnlocked"], 0);
    assert_eq!(json["topGenres"], serde_json::json!([]));
    assert_eq!(json["wishlist"], serde_json::json!([]));
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn safe_upstream_message_is_surfaced_verbatim() {
    let gateway = Arc::new(StubSteam {
        fail_profile_with: Some(|| AppError::not_found(messages::PROFILE_NOT_FOUND)),
        ..StubSteam::default()
    });
    let app = app_with(gateway, RateLimiter::default());

    let response = app
        .oneshot(recap_request("?steamUrl=76561197960287930"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], messages::PROFILE_NOT_FOUND);
}

#[tokio::test]
async fn unknown_internal_message_is_masked() {
    let gateway = Arc::new(StubSteam {
        fail_profile_with: Some(|| AppError::internal("connection pool exhausted at 10.0.0.3")),
        ..StubSteam::default()
    });
    let app = app_with(gateway, RateLimiter::default());

    let response = app
        .oneshot(recap_request("?steamUrl=76561197960287930"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], messages::GENERIC_FAILURE);
    assert!(!json["error"].as_str().unwrap().contains("10.0.0.3"));
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = app_with(Arc::new(StubSteam::default()), RateLimiter::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}
