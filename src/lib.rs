//! Local development HTTP relay.
//!
//! A small reverse proxy that sits between a browser and a caller-chosen
//! upstream API origin. The browser talks to localhost only, so same-origin
//! restrictions never apply; the relay forwards each request to the origin
//! named in a dedicated header and streams the response back.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser ──▶ /relay/<sub-path> ──▶ ┌──────────────────────────┐
//!                                     │          RELAY           │
//!                                     │  validate target header  │
//!                                     │  strip mount prefix      │
//!                                     │  filter hop-by-hop hdrs  │
//!                                     │  forward body verbatim   │──▶ Upstream
//!   Browser ◀── streamed response ◀── │  stream response chunks  │◀── Origin
//!                                     └──────────────────────────┘
//! ```
//!
//! The relay is stateless between requests: each inbound request produces
//! exactly one outbound request and exactly one response, success or a
//! synthesized JSON error. There is no caching, no retry, and no buffering
//! of the upstream body.

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
