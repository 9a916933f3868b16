// ABOUTME: Wire data model for the gym backend with lenient boundary parsing
// ABOUTME: Muscle groups, exercises and workout history as the home screen consumes them
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Data model for the home screen.
//!
//! Everything here is read-only on the client and overwritten wholesale on
//! each fetch. The history payload is the one loosely-typed shape: records
//! may miss fields or carry malformed timestamps, so the questionable fields
//! are validated once, here at the parse boundary, into `Option`s instead of
//! leaking "is this present and well-formed" decisions into the calculator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A muscle group, identified purely by its display name.
///
/// There is no server-side ID; the name doubles as the filter key for
/// exercises. Equality is case-insensitive because the backend and the
/// selection state disagree on casing (names are Portuguese, so comparison
/// goes through Unicode lowercasing, not ASCII).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MuscleGroup(String);

impl MuscleGroup {
    /// Wrap a display name as a muscle group.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The display name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for MuscleGroup {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }
}

impl Eq for MuscleGroup {}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MuscleGroup {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// An exercise as listed for the selected muscle group.
///
/// Created and updated server-side only; the client refetches the whole list
/// whenever the selection changes. Display fields are lenient: the list
/// renders what it gets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Unique opaque identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Muscle group this exercise belongs to
    #[serde(default)]
    pub group: String,
    /// Number of series
    #[serde(default)]
    pub series: Option<u32>,
    /// Repetitions per series
    #[serde(default)]
    pub repetitions: Option<u32>,
    /// Thumbnail image file name
    #[serde(default)]
    pub thumb: Option<String>,
    /// Demonstration animation file name
    #[serde(default)]
    pub demo: Option<String>,
}

/// One day of workout history: a dated grouping of individual log records.
///
/// The backend claims the outer sequence is most-recent-day-first and each
/// `data` vector is most-recent-log-first, but nothing verifies that, so
/// consumers must not trust the ordering (the inactivity calculator scans
/// the whole structure instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryDay {
    /// Day label as the backend renders it
    #[serde(default)]
    pub title: Option<String>,
    /// Workout log records for the day; expected nonempty but not guaranteed
    #[serde(default)]
    pub data: Vec<WorkoutRecord>,
}

/// A single logged workout within a history day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutRecord {
    /// Log record identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Exercise name
    #[serde(default)]
    pub name: Option<String>,
    /// Muscle group of the logged exercise
    #[serde(default)]
    pub group: Option<String>,
    /// Creation timestamp; `None` when the wire value is absent, null, or
    /// not a parseable ISO-8601 string
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Parse a timestamp that the backend may omit, null out, or mangle.
///
/// Any non-string or unparseable value becomes `None` rather than failing
/// the whole history payload.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc)))
}
