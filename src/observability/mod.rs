//! Observability subsystem.
//!
//! Structured logging only: the relay's per-request spans come from
//! `tower_http::trace::TraceLayer`, correlated by the `x-request-id`
//! header the request-id middleware assigns. Request bodies and forwarded
//! header values are never logged; they may carry credentials.

pub mod logging;
