// ABOUTME: Per-caller request rate limiting with fixed windows and in-memory counters
// ABOUTME: Consulted once per inbound request before the recap pipeline runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Rate Limiting
//!
//! A fixed-window limiter keyed by caller IP. The counter map is the only
//! shared mutable state across concurrent requests; `DashMap` keeps the
//! check lock-free per key. Denied callers receive standard
//! `X-RateLimit-*` and `Retry-After` headers.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use http::{HeaderMap, HeaderValue};
use std::time::{Duration, Instant};

use crate::constants::limits;

/// HTTP header names for rate limiting
pub mod headers {
    /// Maximum requests allowed in the current window
    pub const X_RATE_LIMIT_LIMIT: &str = "X-RateLimit-Limit";
    /// Remaining requests in the current window
    pub const X_RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
    /// Unix timestamp when the current window resets
    pub const X_RATE_LIMIT_RESET: &str = "X-RateLimit-Reset";
    /// Seconds until the caller may retry
    pub const RETRY_AFTER: &str = "Retry-After";
}

/// Outcome of one rate-limit check
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// Requests allowed per window
    pub limit: u32,
    /// Requests remaining in the current window after this one
    pub remaining: u32,
    /// Seconds until the current window resets
    pub retry_after_secs: u64,
}

#[derive(Debug, Clone, Copy)]
struct WindowCounter {
    count: u32,
    window_start: Instant,
}

/// Fixed-window rate limiter keyed by caller identity
#[derive(Debug)]
pub struct RateLimiter {
    counters: DashMap<String, WindowCounter>,
    limit: u32,
    window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(
            limits::DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            Duration::from_secs(limits::DEFAULT_RATE_LIMIT_WINDOW_SECS),
        )
    }
}

impl RateLimiter {
    #[must_use]
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            counters: DashMap::new(),
            limit,
            window,
        }
    }

    /// Record one request for `key` and decide whether it may proceed.
    ///
    /// An expired window resets the counter; a denied request does not
    /// advance the count, so the caller's window is not extended by retries.
    pub fn check(&self, key: &str) -> RateLimitDecision {
        let now = Instant::now();
        let mut entry = self
            .counters
            .entry(key.to_owned())
            .or_insert(WindowCounter {
                count: 0,
                window_start: now,
            });

        if now.duration_since(entry.window_start) > self.window {
            entry.count = 0;
            entry.window_start = now;
        }

        let elapsed = now.duration_since(entry.window_start);
        let retry_after_secs = self.window.saturating_sub(elapsed).as_secs();

        if entry.count >= self.limit {
            return RateLimitDecision {
                allowed: false,
                limit: self.limit,
                remaining: 0,
                retry_after_secs,
            };
        }

        entry.count += 1;
        RateLimitDecision {
            allowed: true,
            limit: self.limit,
            remaining: self.limit - entry.count,
            retry_after_secs,
        }
    }
}

/// Create a `HeaderMap` with standard rate limit headers for a decision
#[must_use]
pub fn create_rate_limit_headers(decision: &RateLimitDecision) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Ok(value) = HeaderValue::from_str(&decision.limit.to_string()) {
        headers.insert(headers::X_RATE_LIMIT_LIMIT, value);
    }
    if let Ok(value) = HeaderValue::from_str(&decision.remaining.to_string()) {
        headers.insert(headers::X_RATE_LIMIT_REMAINING, value);
    }

    let reset_at: DateTime<Utc> =
        Utc::now() + chrono::Duration::seconds(decision.retry_after_secs as i64);
    if let Ok(value) = HeaderValue::from_str(&reset_at.timestamp().to_string()) {
        headers.insert(headers::X_RATE_LIMIT_RESET, value);
    }

    if !decision.allowed {
        if let Ok(value) = HeaderValue::from_str(&decision.retry_after_secs.to_string()) {
            headers.insert(headers::RETRY_AFTER, value);
        }
    }

    headers
}
