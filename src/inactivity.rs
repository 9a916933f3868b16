// ABOUTME: Pure derivation of the days-off inactivity metric from workout history
// ABOUTME: Scans the full history structure instead of trusting server-side ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Inactivity metric derivation.
//!
//! The backend claims history arrives most-recent-first at both nesting
//! levels, but that ordering is an unverified external contract. Rather than
//! trusting index 0, [`days_off`] reduces over every record and takes the
//! maximum timestamp, so a reordered payload still yields the right answer.

use chrono::{DateTime, Utc};

use crate::models::HistoryDay;

/// Days since the last logged workout, derived fresh on every history change.
///
/// `Unknown` is a defined sentinel, not an error: it covers empty history,
/// days with no records, and records whose timestamps did not parse. It is
/// deliberately distinguishable from a genuine same-day value of zero so
/// notification targeting can tell "worked out today" from "no data".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysOff {
    /// Whole days since the most recent logged workout, never negative
    Days(i64),
    /// No usable history to derive from
    Unknown,
}

impl std::fmt::Display for DaysOff {
    /// Canonical string form, as sent to the tagging service.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Compute days since the most recent logged workout.
///
/// Calendar-day granularity: the difference between the calendar date of
/// `now` and the calendar date of the most recent record, so a workout late
/// yesterday counts as one day off this morning regardless of elapsed hours.
/// Records dated in the future (clock skew) clamp to zero.
///
/// Pure and total: identical inputs give identical output, and no payload
/// shape makes it panic.
pub fn days_off(history: &[HistoryDay], now: DateTime<Utc>) -> DaysOff {
    let most_recent = history
        .iter()
        .flat_map(|day| day.data.iter())
        .filter_map(|record| record.created_at)
        .max();

    match most_recent {
        Some(last) => {
            let days = now
                .date_naive()
                .signed_duration_since(last.date_naive())
                .num_days();
            DaysOff::Days(days.max(0))
        }
        None => DaysOff::Unknown,
    }
}
