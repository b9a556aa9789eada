//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, module size bounded)
//! - Check addresses parse before anything binds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: QrServConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::QrServConfig;

/// Largest accepted module edge, in pixels.
pub const MAX_MODULE_SIZE: u32 = 64;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("listener.unix_socket must not be empty")]
    EmptySocketPath,

    #[error("render.module_size must be between 1 and {max}, got {0}", max = MAX_MODULE_SIZE)]
    ModuleSizeOutOfRange(u32),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check `config` for semantic errors.
pub fn validate_config(config: &QrServConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match &config.listener.unix_socket {
        Some(path) if path.as_os_str().is_empty() => errors.push(ValidationError::EmptySocketPath),
        Some(_) => {}
        None => {
            if config.listener.bind_address.parse::<SocketAddr>().is_err() {
                errors.push(ValidationError::InvalidBindAddress(
                    config.listener.bind_address.clone(),
                ));
            }
        }
    }

    if !(1..=MAX_MODULE_SIZE).contains(&config.render.module_size) {
        errors.push(ValidationError::ModuleSizeOutOfRange(config.render.module_size));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
