// ABOUTME: REST client for the push-notification service's user tag API
// ABOUTME: Updates tags for the externally-identified user of the configured app
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::NotificationConfig;
use crate::errors::TagError;
use crate::utils::http_client::shared_client;

use super::UserTagger;

/// Tag client for the push-notification service REST API.
pub struct PushTagClient {
    client: Client,
    base_url: String,
    app_id: String,
    api_key: String,
    external_user_id: String,
}

impl PushTagClient {
    /// Build a tag client from the notification block of the configuration.
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            client: shared_client().clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
            app_id: config.app_id.clone(),
            api_key: config.api_key.clone(),
            external_user_id: config.external_user_id.clone(),
        }
    }
}

#[async_trait]
impl UserTagger for PushTagClient {
    async fn set_tag(&self, key: &'static str, value: String) -> Result<(), TagError> {
        let url = format!(
            "{}/apps/{}/users/by/external_id/{}",
            self.base_url,
            self.app_id,
            urlencoding::encode(&self.external_user_id)
        );
        let body = serde_json::json!({
            "properties": {
                "tags": { key: value }
            }
        });

        debug!(key, %url, "updating user tag");
        let response = self
            .client
            .patch(&url)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TagError::Rejected { status });
        }
        Ok(())
    }
}
