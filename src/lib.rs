// ABOUTME: Main library entry point for the steam-recap aggregation service
// ABOUTME: Wires the identifier normalizer, Steam gateway, recap orchestrator and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Steam Recap
//!
//! A small HTTP service that aggregates a Steam account into a "year in
//! review" style report: profile, ownership and playtime summary, top-10
//! most-played games enriched with achievement counts, a genre tally, and a
//! wishlist preview.
//!
//! ## Architecture
//!
//! The service is a single one-way pipeline per request:
//!
//! - **[`identity`]**: normalizes free-form input (profile URL, path segment
//!   or bare SteamID64) into a resolution token
//! - **[`gateway`]**: typed fetch wrappers around each Steam Web API and
//!   Store API read, each independently fallible
//! - **[`recap`]**: the aggregation orchestrator - sequential mandatory
//!   fetches followed by concurrent best-effort enrichment
//! - **[`errors`]**: classifies every failure into a stable, user-safe
//!   taxonomy with one status code and one message per failed request
//!
//! Enrichment branches never fail a request: any error inside them degrades
//! to a zero count, an empty tally, or a dropped wishlist entry.

/// Server binary configuration loaded from environment variables
pub mod config;

/// Application constants: upstream endpoints, pipeline limits, safe messages
pub mod constants;

/// Unified error handling with stable error codes and HTTP responses
pub mod errors;

/// Typed clients for the Steam Web API and Store API
pub mod gateway;

/// Normalization of user-supplied profile URLs and IDs
pub mod identity;

/// Structured logging configuration
pub mod logging;

/// Domain models shared between the orchestrator and the HTTP surface
pub mod models;

/// Per-caller request rate limiting
pub mod rate_limiting;

/// The recap aggregation orchestrator and its pure transforms
pub mod recap;

/// HTTP routes
pub mod routes;

/// Shared utilities (HTTP client construction)
pub mod utils;
