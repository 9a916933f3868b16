// ABOUTME: Home screen controller: fetch lifecycle, selection state and error notices
// ABOUTME: Wires history updates into inactivity metric derivation and tag propagation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Home screen controller.
//!
//! Owns every piece of screen state: muscle groups, the selected group, the
//! exercise list for that group, and the workout history. State slots are
//! overwritten wholesale per fetch, never merged, and all mutation goes
//! through `&mut self`, so nothing here needs a lock.
//!
//! Failures become transient [`Notice`]s on an injected channel (the
//! embedding UI renders them as toasts) and never abort the other fetches.
//! Whenever the history slot updates, the controller derives the inactivity
//! metric and fires tag propagation, exactly once per update: the derived
//! effect hangs off the state change itself, not off any render lifecycle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::errors::GatewayError;
use crate::gateway::GymApi;
use crate::inactivity::{days_off, DaysOff};
use crate::models::{Exercise, HistoryDay, MuscleGroup};
use crate::notifications::{tag_days_off, UserTagger};

/// Fallback notice title when the groups fetch fails without a backend message
const GROUPS_FETCH_FALLBACK: &str = "Não foi possível carregar os grupos musculares.";

/// Fallback notice title when the exercises fetch fails without a backend message
const EXERCISES_FETCH_FALLBACK: &str = "Não foi possível carregar os exercícios.";

/// Fallback notice title when the history fetch fails without a backend message
const HISTORY_FETCH_FALLBACK: &str = "Não foi possível carregar o histórico.";

/// Severity of a transient notice, mapped to a toast color by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    /// Red toast
    Error,
    /// Neutral toast
    Info,
}

impl std::fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// A transient, non-blocking user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message shown to the user
    pub title: String,
    /// Toast severity
    pub severity: NoticeSeverity,
}

/// Controller for the home screen.
pub struct HomeController {
    api: Arc<dyn GymApi>,
    tagger: Arc<dyn UserTagger>,
    notices: UnboundedSender<Notice>,
    clock: fn() -> DateTime<Utc>,
    groups: Vec<MuscleGroup>,
    selected_group: MuscleGroup,
    exercises: Vec<Exercise>,
    history: Vec<HistoryDay>,
    loading_exercises: bool,
    last_days_off: Option<DaysOff>,
}

impl HomeController {
    /// Build a controller with all collaborators injected.
    ///
    /// `default_group` is the selection before the user picks one; it may
    /// not be in the fetched group set yet, in which case the exercise list
    /// simply stays empty.
    pub fn new(
        api: Arc<dyn GymApi>,
        tagger: Arc<dyn UserTagger>,
        notices: UnboundedSender<Notice>,
        default_group: MuscleGroup,
    ) -> Self {
        Self {
            api,
            tagger,
            notices,
            clock: Utc::now,
            groups: Vec::new(),
            selected_group: default_group,
            exercises: Vec::new(),
            history: Vec::new(),
            loading_exercises: false,
            last_days_off: None,
        }
    }

    /// Replace the wall-clock source. Tests inject a fixed clock so the
    /// derived metric is deterministic.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Mount the screen: fetch groups and history concurrently.
    ///
    /// Each result populates its own slot; a failure in one emits a notice
    /// and leaves the other untouched. Exercises are not fetched here; the
    /// first focus event takes care of that.
    pub async fn on_mount(&mut self) {
        let (groups, history) =
            tokio::join!(self.api.fetch_groups(), self.api.fetch_history());

        match groups {
            Ok(groups) => self.groups = groups,
            Err(err) => self.notify_fetch_error(&err, GROUPS_FETCH_FALLBACK),
        }
        match history {
            Ok(history) => self.apply_history(history),
            Err(err) => self.notify_fetch_error(&err, HISTORY_FETCH_FALLBACK),
        }
    }

    /// Screen gained focus: refetch exercises for the current selection.
    pub async fn on_focus(&mut self) {
        self.refresh_exercises().await;
    }

    /// Select a muscle group and refetch its exercises.
    ///
    /// The selection updates synchronously, independent of any in-flight
    /// fetch. Re-selecting the current group is valid and still refetches.
    pub async fn select_group(&mut self, group: MuscleGroup) {
        self.selected_group = group;
        self.refresh_exercises().await;
    }

    /// Fetch exercises for the selected group behind the loading flag.
    ///
    /// The flag is cleared on both arms, so the UI can never stick on the
    /// loading indicator. Overlapping calls are not cancelled; the last
    /// response to resolve wins.
    async fn refresh_exercises(&mut self) {
        self.loading_exercises = true;
        let result = self.api.fetch_exercises_by_group(&self.selected_group).await;
        match result {
            Ok(exercises) => {
                info!(
                    group = %self.selected_group,
                    count = exercises.len(),
                    "exercises loaded"
                );
                self.exercises = exercises;
            }
            Err(err) => self.notify_fetch_error(&err, EXERCISES_FETCH_FALLBACK),
        }
        self.loading_exercises = false;
    }

    /// Overwrite the history slot and run the derived effect: recompute the
    /// inactivity metric and propagate it, once per successful update.
    fn apply_history(&mut self, history: Vec<HistoryDay>) {
        self.history = history;
        let metric = days_off(&self.history, (self.clock)());
        self.last_days_off = Some(metric);
        info!(days_off = %metric, "history updated, propagating inactivity tag");
        drop(tag_days_off(Arc::clone(&self.tagger), metric));
    }

    /// Translate a gateway failure into a transient notice.
    fn notify_fetch_error(&self, error: &GatewayError, fallback: &str) {
        warn!(error = %error, "fetch failed");
        let title = error.user_message().unwrap_or(fallback).to_owned();
        // A dropped receiver means no UI is listening; nothing to do.
        let _ = self.notices.send(Notice {
            title,
            severity: NoticeSeverity::Error,
        });
    }

    /// Last fetched muscle groups.
    pub fn groups(&self) -> &[MuscleGroup] {
        &self.groups
    }

    /// Currently selected muscle group.
    pub fn selected_group(&self) -> &MuscleGroup {
        &self.selected_group
    }

    /// Exercises for the selected group.
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Last fetched workout history.
    pub fn history(&self) -> &[HistoryDay] {
        &self.history
    }

    /// Whether an exercise fetch is in flight.
    pub fn is_loading_exercises(&self) -> bool {
        self.loading_exercises
    }

    /// Metric derived from the last successful history update, if any.
    pub fn last_days_off(&self) -> Option<DaysOff> {
        self.last_days_off
    }
}
