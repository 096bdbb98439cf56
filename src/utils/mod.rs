// ABOUTME: Shared utility modules
// ABOUTME: Currently hosts HTTP client construction with pooled connections and timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Shared HTTP client utilities
pub mod http_client;
