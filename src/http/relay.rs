//! The forwarding pipe.
//!
//! # Responsibilities
//! - Validate the target-origin header before any network I/O
//! - Rebuild the inbound request against the target origin
//! - Issue exactly one outbound request (no retry)
//! - Stream the upstream response back chunk by chunk
//! - Convert pre-stream transport failures into structured 502s
//!
//! # Design Decisions
//! - The 502-vs-stream decision is made strictly before the first response
//!   byte is written; once streaming has begun a dropped upstream simply
//!   truncates the stream
//! - A zero-length inbound body is forwarded as *no* body, since upstream
//!   APIs can branch on body presence
//! - Caller disconnects drop the response stream, which drops the upstream
//!   response and releases its connection rather than draining it
//! - Log lines carry method, path and status only; forwarded headers can
//!   hold credentials and bodies are not the relay's to record

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::http::headers::{build_target_url, display_name, forwardable_headers};
use crate::http::server::AppState;

/// Terminal failure of a single relayed request.
///
/// Variants map one-to-one onto the caller-visible error responses; every
/// failure terminates at the request boundary and never affects another
/// in-flight request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The target-origin header was absent or empty. Detected before any
    /// outbound call is made.
    #[error("Missing {0} header")]
    MissingTargetHeader(String),

    /// The inbound body could not be read from the caller.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    /// The inbound body exceeded the configured cap.
    #[error("request body exceeds the {0} byte limit")]
    BodyTooLarge(usize),

    /// The outbound call failed before response headers arrived: DNS,
    /// connect, TLS, timeout, or a malformed target URL.
    #[error(transparent)]
    Upstream(#[from] reqwest::Error),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingTargetHeader(_) | RelayError::BodyRead(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Axum handler mounted under the relay prefix for every method.
pub async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match forward(&state, request).await {
        Ok(response) => {
            tracing::debug!(method = %method, path = %path, status = %response.status(), "relayed");
            response
        }
        Err(error) => {
            tracing::warn!(method = %method, path = %path, error = %error, "relay failed");
            error.into_response()
        }
    }
}

/// Forward one request and hand back the upstream response with its body
/// still streaming. Exactly one outbound call per inbound request.
async fn forward(state: &AppState, request: Request<Body>) -> Result<Response, RelayError> {
    let (parts, body) = request.into_parts();
    let options = &state.options;

    // Validation happens before the body is touched: a missing target
    // header must produce a 400 with zero outbound traffic.
    let target_base = parts
        .headers
        .get(options.target_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| RelayError::MissingTargetHeader(display_name(&options.target_header)))?
        .to_string();

    let sub_path = parts
        .uri
        .path()
        .strip_prefix(options.mount_prefix.as_str())
        .unwrap_or("");
    let target_url = build_target_url(&target_base, sub_path, parts.uri.query());

    let outbound_headers = forwardable_headers(&parts.headers, &options.target_header);

    let body = to_bytes(body, options.max_body_bytes)
        .await
        .map_err(|error| classify_body_error(error, options.max_body_bytes))?;

    let mut outbound = state
        .client
        .request(parts.method, &target_url)
        .headers(outbound_headers);
    if !body.is_empty() {
        outbound = outbound.body(body);
    }

    let upstream = outbound.send().await?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    // From here on the response is committed: status and content-type go
    // out first, then the body is copied chunk by chunk as the upstream
    // produces it, never materialized in full.
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);

    Ok(response)
}

/// Tell a body-over-limit failure apart from a plain read failure.
fn classify_body_error(error: axum::Error, limit: usize) -> RelayError {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&error);
    while let Some(current) = source {
        if current
            .downcast_ref::<http_body_util::LengthLimitError>()
            .is_some()
        {
            return RelayError::BodyTooLarge(limit);
        }
        source = current.source();
    }
    RelayError::BodyRead(error)
}
