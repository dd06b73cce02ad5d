//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses and the mount prefix is well-formed
//! - Check the target header is a legal HTTP header name
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::header::HeaderName;
use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("relay.mount_prefix {0:?} must start with '/'")]
    PrefixMissingLeadingSlash(String),

    #[error("relay.mount_prefix must not be the bare root '/'")]
    PrefixIsRoot,

    #[error("relay.mount_prefix {0:?} must not end with '/'")]
    PrefixTrailingSlash(String),

    #[error("relay.target_header {0:?} is not a valid header name")]
    TargetHeader(String),

    #[error("relay.{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Validate a deserialized configuration, collecting every problem.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let prefix = &config.relay.mount_prefix;
    if !prefix.starts_with('/') {
        errors.push(ValidationError::PrefixMissingLeadingSlash(prefix.clone()));
    } else if prefix == "/" {
        errors.push(ValidationError::PrefixIsRoot);
    } else if prefix.ends_with('/') {
        errors.push(ValidationError::PrefixTrailingSlash(prefix.clone()));
    }

    if HeaderName::from_bytes(config.relay.target_header.as_bytes()).is_err() {
        errors.push(ValidationError::TargetHeader(
            config.relay.target_header.clone(),
        ));
    }

    if config.relay.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("connect_timeout_secs"));
    }
    if config.relay.read_timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("read_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
