// ABOUTME: Push-notification user tag propagation for inactivity targeting
// ABOUTME: UserTagger seam, REST tag client and the fire-and-forget days_off helper
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Tag propagation to the push-notification service.
//!
//! The derived inactivity metric becomes a durable `days_off` user tag so
//! the notification backend can target lapsed users. Propagation is
//! best-effort telemetry: the helper spawns a detached task, and any failure
//! is logged and dropped; it never surfaces as a UI notice and never blocks
//! the fetch pipeline. The client is built from config and injected; there
//! is no ambient SDK singleton.

/// REST tag client implementation
pub mod tags;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::errors::TagError;
use crate::inactivity::DaysOff;

pub use tags::PushTagClient;

/// Tag key the notification backend targets for inactivity campaigns.
/// Last-write-wins on the service side; the client holds no ack state.
pub const DAYS_OFF_TAG: &str = "days_off";

/// Seam to the external user-tagging service.
#[async_trait]
pub trait UserTagger: Send + Sync {
    /// Set one string-valued tag on the current user.
    async fn set_tag(&self, key: &'static str, value: String) -> Result<(), TagError>;
}

/// Tagger that records nothing; used when no tagging service is configured.
pub struct NoopTagger;

#[async_trait]
impl UserTagger for NoopTagger {
    async fn set_tag(&self, key: &'static str, value: String) -> Result<(), TagError> {
        debug!(key, value = %value, "tagging disabled, dropping tag update");
        Ok(())
    }
}

/// Propagate the inactivity metric under the `days_off` key, fire-and-forget.
///
/// Returns the spawned task handle; production callers drop it, tests await
/// it to observe completion.
pub fn tag_days_off(tagger: Arc<dyn UserTagger>, metric: DaysOff) -> JoinHandle<()> {
    tokio::spawn(async move {
        let value = metric.to_string();
        if let Err(err) = tagger.set_tag(DAYS_OFF_TAG, value.clone()).await {
            // Best-effort telemetry: log and drop.
            debug!(value = %value, error = %err, "days_off tag update failed");
        }
    })
}
