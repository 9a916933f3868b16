// ABOUTME: Shared test utilities for gym-home-client integration tests
// ABOUTME: Quiet logging init, scripted gateway fake and recording tagger
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test utilities for `gym-home-client`

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gym_home_client::errors::{GatewayError, TagError};
use gym_home_client::gateway::GymApi;
use gym_home_client::models::{Exercise, HistoryDay, MuscleGroup, WorkoutRecord};
use reqwest::StatusCode;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// One scripted gateway outcome, replayable on every call.
///
/// `GatewayError` is not `Clone` (it can wrap a live `reqwest::Error`), so
/// the fake stores a recipe and builds a fresh error per call.
pub enum Scripted<T> {
    /// Succeed with these items
    Ok(Vec<T>),
    /// Fail with a backend-reported message
    Remote(&'static str),
    /// Fail with a bare HTTP status
    Unexpected(u16),
}

impl<T: Clone> Scripted<T> {
    fn produce(&self) -> Result<Vec<T>, GatewayError> {
        match self {
            Self::Ok(items) => Ok(items.clone()),
            Self::Remote(message) => Err(GatewayError::Remote {
                message: (*message).to_owned(),
            }),
            Self::Unexpected(status) => Err(GatewayError::Unexpected {
                status: StatusCode::from_u16(*status).unwrap(),
            }),
        }
    }
}

/// Scripted in-memory stand-in for the backend gateway.
pub struct FakeGymApi {
    pub groups: Scripted<MuscleGroup>,
    pub exercises: Scripted<Exercise>,
    pub history: Scripted<HistoryDay>,
    /// Group names passed to `fetch_exercises_by_group`, in call order
    pub exercise_fetches: Mutex<Vec<String>>,
}

impl Default for FakeGymApi {
    fn default() -> Self {
        Self {
            groups: Scripted::Ok(Vec::new()),
            exercises: Scripted::Ok(Vec::new()),
            history: Scripted::Ok(Vec::new()),
            exercise_fetches: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GymApi for FakeGymApi {
    async fn fetch_groups(&self) -> Result<Vec<MuscleGroup>, GatewayError> {
        self.groups.produce()
    }

    async fn fetch_exercises_by_group(
        &self,
        group: &MuscleGroup,
    ) -> Result<Vec<Exercise>, GatewayError> {
        self.exercise_fetches
            .lock()
            .unwrap()
            .push(group.as_str().to_owned());
        self.exercises.produce()
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryDay>, GatewayError> {
        self.history.produce()
    }
}

/// Tagger that records every call and optionally fails.
#[derive(Default)]
pub struct RecordingTagger {
    pub calls: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingTagger {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl gym_home_client::notifications::UserTagger for RecordingTagger {
    async fn set_tag(&self, key: &'static str, value: String) -> Result<(), TagError> {
        self.calls.lock().unwrap().push((key.to_owned(), value));
        if self.fail {
            return Err(TagError::Rejected {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

/// Parse an RFC 3339 timestamp for fixtures.
pub fn utc(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
}

/// One history day holding one record per timestamp.
pub fn history_day(timestamps: &[&str]) -> HistoryDay {
    HistoryDay {
        title: None,
        data: timestamps
            .iter()
            .map(|ts| WorkoutRecord {
                id: None,
                name: None,
                group: None,
                created_at: Some(utc(ts)),
            })
            .collect(),
    }
}

/// Minimal exercise fixture.
pub fn exercise(id: &str, name: &str, group: &str) -> Exercise {
    Exercise {
        id: id.to_owned(),
        name: name.to_owned(),
        group: group.to_owned(),
        series: Some(3),
        repetitions: Some(12),
        thumb: None,
        demo: None,
    }
}

/// Let detached tasks spawned by the controller run to completion.
///
/// The test runtime is single-threaded, so a handful of yields
/// deterministically drains any ready spawned task.
pub async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
