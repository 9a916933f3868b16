// ABOUTME: Unified error handling for the gym home client core
// ABOUTME: Defines gateway, tag propagation and configuration error taxonomies
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Error taxonomy for the client core.
//!
//! Gateway failures split into transport problems and backend-reported
//! application errors; only the latter carry a message that is safe to show
//! to the user. Tag propagation errors exist so the propagation layer has
//! something concrete to swallow and log.

use thiserror::Error;

/// Errors surfaced by the Remote Data Gateway.
///
/// One request, one error: the gateway never retries, so every variant maps
/// to exactly one failed backend call.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure: connect, timeout, TLS, or body decode.
    #[error("network error while calling the backend")]
    Network(#[from] reqwest::Error),

    /// Backend returned a recognized application-level error payload.
    /// The message is written for end users and safe to display verbatim.
    #[error("{message}")]
    Remote {
        /// User-displayable message reported by the backend
        message: String,
    },

    /// Backend returned a non-success status without a recognized error
    /// payload. Callers fall back to their own default message.
    #[error("unexpected backend response: HTTP {status}")]
    Unexpected {
        /// HTTP status of the response
        status: reqwest::StatusCode,
    },
}

impl GatewayError {
    /// The user-displayable message, when the backend provided one.
    ///
    /// Transport failures and unrecognized responses return `None`; callers
    /// substitute a domain-appropriate default.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message } => Some(message),
            Self::Network(_) | Self::Unexpected { .. } => None,
        }
    }
}

/// Errors from the push-notification tagging service.
///
/// Tag propagation is best-effort telemetry: these never reach the UI, the
/// propagation helper logs and drops them.
#[derive(Debug, Error)]
pub enum TagError {
    /// Transport-level failure talking to the tagging service.
    #[error("network error while calling the tagging service")]
    Network(#[from] reqwest::Error),

    /// Tagging service rejected the update.
    #[error("tagging service rejected the update: HTTP {status}")]
    Rejected {
        /// HTTP status of the rejection
        status: reqwest::StatusCode,
    },
}

/// Environment configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required configuration: {key}")]
    Missing {
        /// Name of the missing environment variable
        key: &'static str,
    },

    /// An environment variable is set but cannot be parsed.
    #[error("invalid configuration for {key}: {reason}")]
    Invalid {
        /// Name of the offending environment variable
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}
