// ABOUTME: Environment-based configuration for the gym home client
// ABOUTME: Backend endpoint, credentials, HTTP timeouts and optional tagging service settings
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-only configuration.
//!
//! Everything the client needs comes from environment variables with
//! sensible defaults; there is no config file. `GYM_API_BASE_URL` is the one
//! required setting. Tagging-service settings are optional as a block:
//! setting `GYM_PUSH_APP_ID` opts in and then the key and user id become
//! required too.

use std::env;

use url::Url;

use crate::errors::ConfigError;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Group selected before the user picks one. Matches the first group the
/// backend seeds, so the screen is never empty on first paint.
const DEFAULT_GROUP: &str = "antebraço";

/// Default tagging service endpoint
const DEFAULT_PUSH_API_BASE: &str = "https://api.onesignal.com";

/// Client configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (`GYM_API_BASE_URL`, required)
    pub api_base_url: Url,
    /// Session bearer token attached to every backend request
    /// (`GYM_ACCESS_TOKEN`); absent means unauthenticated calls
    pub access_token: Option<String>,
    /// Request timeout in seconds (`GYM_HTTP_TIMEOUT_SECS`)
    pub http_timeout_secs: u64,
    /// Connection timeout in seconds (`GYM_HTTP_CONNECT_TIMEOUT_SECS`)
    pub http_connect_timeout_secs: u64,
    /// Muscle group selected on first paint (`GYM_DEFAULT_GROUP`)
    pub default_group: String,
    /// Tagging service settings; `None` disables tag propagation
    pub notifications: Option<NotificationConfig>,
}

/// Push-notification tagging service settings.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Tagging service base URL (`GYM_PUSH_API_BASE_URL`)
    pub api_base_url: String,
    /// Application id at the tagging service (`GYM_PUSH_APP_ID`)
    pub app_id: String,
    /// REST API key (`GYM_PUSH_API_KEY`)
    pub api_key: String,
    /// External user id the tag is attached to (`GYM_PUSH_EXTERNAL_USER_ID`)
    pub external_user_id: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `GYM_API_BASE_URL` is missing or not a
    /// valid URL, when a timeout value does not parse as an integer, or when
    /// the tagging block is enabled but incomplete.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_base = env::var("GYM_API_BASE_URL").map_err(|_| ConfigError::Missing {
            key: "GYM_API_BASE_URL",
        })?;
        let api_base_url = Url::parse(&raw_base).map_err(|err| ConfigError::Invalid {
            key: "GYM_API_BASE_URL",
            reason: err.to_string(),
        })?;

        Ok(Self {
            api_base_url,
            access_token: env::var("GYM_ACCESS_TOKEN").ok(),
            http_timeout_secs: env_u64("GYM_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            http_connect_timeout_secs: env_u64(
                "GYM_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            default_group: env::var("GYM_DEFAULT_GROUP")
                .unwrap_or_else(|_| DEFAULT_GROUP.to_owned()),
            notifications: NotificationConfig::from_env()?,
        })
    }
}

impl NotificationConfig {
    /// Load the optional tagging block; `None` when `GYM_PUSH_APP_ID` is unset.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let Ok(app_id) = env::var("GYM_PUSH_APP_ID") else {
            return Ok(None);
        };

        let api_key = env::var("GYM_PUSH_API_KEY").map_err(|_| ConfigError::Missing {
            key: "GYM_PUSH_API_KEY",
        })?;
        let external_user_id =
            env::var("GYM_PUSH_EXTERNAL_USER_ID").map_err(|_| ConfigError::Missing {
                key: "GYM_PUSH_EXTERNAL_USER_ID",
            })?;

        Ok(Some(Self {
            api_base_url: env::var("GYM_PUSH_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PUSH_API_BASE.to_owned()),
            app_id,
            api_key,
            external_user_id,
        }))
    }
}

/// Read an integer environment variable with a default.
fn env_u64(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            key,
            reason: format!("expected an integer, got {raw:?}"),
        }),
        Err(_) => Ok(default),
    }
}
