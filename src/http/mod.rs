//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, mount prefix routing, middleware)
//!     → relay.rs (validate target header, build outbound request)
//!     → headers.rs (exclusion set, multi-value join, URL join)
//!     → upstream origin
//!     → relay.rs (stream response chunks back to the caller)
//! ```

pub mod headers;
pub mod relay;
pub mod server;

pub use relay::RelayError;
pub use server::{AppState, HttpServer, ServerError};
