//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Forwarding behavior (mount prefix, target header, limits).
    pub relay: ForwardConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8787").
    ///
    /// Loopback by default: this is a development relay and forwards
    /// whatever credentials the browser attaches.
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8787".to_string(),
        }
    }
}

/// Forwarding configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardConfig {
    /// Path prefix the relay is mounted under. Requests elsewhere are not
    /// its concern. Must start with `/` and carry no trailing slash.
    pub mount_prefix: String,

    /// Name of the request header carrying the upstream base URL.
    pub target_header: String,

    /// Outbound connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Per-read timeout on the outbound response in seconds.
    ///
    /// Bounds how long the relay waits for the *next* chunk from a dead
    /// upstream. Deliberately not a whole-response deadline: token streams
    /// from completion APIs can legitimately run for minutes.
    pub read_timeout_secs: u64,

    /// Maximum inbound request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            mount_prefix: "/relay".to_string(),
            target_header: "x-target-base".to_string(),
            connect_timeout_secs: 10,
            read_timeout_secs: 120,
            max_body_bytes: 32 * 1024 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
