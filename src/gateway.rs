// ABOUTME: Remote Data Gateway for the gym backend
// ABOUTME: Typed authenticated fetches for groups, exercises by group and workout history
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Remote Data Gateway.
//!
//! A thin typed wrapper over three backend endpoints. Each operation issues
//! exactly one request with the held session token attached and maps
//! failures to [`GatewayError`]. No retries here: retry policy, if any,
//! belongs to the caller.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::errors::GatewayError;
use crate::models::{Exercise, HistoryDay, MuscleGroup};
use crate::utils::http_client::shared_client;

/// Backend access as the home screen consumes it.
///
/// The trait is the seam for tests and alternative transports; the screen
/// controller only ever sees `Arc<dyn GymApi>`.
#[async_trait]
pub trait GymApi: Send + Sync {
    /// Fetch all muscle groups. `GET /groups`
    async fn fetch_groups(&self) -> Result<Vec<MuscleGroup>, GatewayError>;

    /// Fetch the exercises belonging to one muscle group.
    /// `GET /exercises/bygroup/{group}`
    async fn fetch_exercises_by_group(
        &self,
        group: &MuscleGroup,
    ) -> Result<Vec<Exercise>, GatewayError>;

    /// Fetch the full workout history. `GET /history`
    async fn fetch_history(&self) -> Result<Vec<HistoryDay>, GatewayError>;
}

/// Application-level error payload the backend emits alongside non-success
/// statuses. Anything else is treated as an unexpected response.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: String,
}

/// HTTP implementation of [`GymApi`] over the shared client.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpGateway {
    /// Build a gateway from client configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_base_url.as_str(), config.access_token.clone())
    }

    /// Build a gateway against an explicit base URL.
    pub fn with_base_url(base_url: &str, access_token: Option<String>) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            access_token,
        }
    }

    /// Issue one authenticated GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, "gateway request");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, %status, "gateway request failed");
            if let Ok(BackendErrorBody { message }) = serde_json::from_str(&body) {
                return Err(GatewayError::Remote { message });
            }
            return Err(GatewayError::Unexpected { status });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GymApi for HttpGateway {
    async fn fetch_groups(&self) -> Result<Vec<MuscleGroup>, GatewayError> {
        self.get_json("groups").await
    }

    async fn fetch_exercises_by_group(
        &self,
        group: &MuscleGroup,
    ) -> Result<Vec<Exercise>, GatewayError> {
        let path = format!("exercises/bygroup/{}", urlencoding::encode(group.as_str()));
        self.get_json(&path).await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryDay>, GatewayError> {
        self.get_json("history").await
    }
}
