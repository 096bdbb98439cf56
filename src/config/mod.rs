// ABOUTME: Configuration module for the steam-recap server
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Environment-based configuration management
pub mod environment;

pub use environment::{RateLimitConfig, ServerConfig};
