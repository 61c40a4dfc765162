//! Sleep/wake status and "time since" derivations.
//!
//! Every function here takes entries ordered newest first, the order the
//! store hands them out in.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::elapsed::format_elapsed;
use crate::entry::Entry;
use crate::entry_type::EntryType;

/// Whether the subject is currently sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepState {
    Asleep,
    Awake,
}

impl SleepState {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asleep => "asleep",
            Self::Awake => "awake",
        }
    }
}

impl fmt::Display for SleepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Most recent entry that changed the sleep/wake state.
fn latest_sleep_or_wake(entries: &[Entry]) -> Option<&Entry> {
    entries.iter().find(|e| e.kind.is_sleep_or_wake())
}

const fn state_after(entry: &Entry) -> SleepState {
    match entry.kind {
        EntryType::Wake => SleepState::Awake,
        _ => SleepState::Asleep,
    }
}

/// Current sleep state, or `None` when no Sleep or Wake entry exists.
pub fn sleep_state(entries: &[Entry]) -> Option<SleepState> {
    latest_sleep_or_wake(entries).map(state_after)
}

/// True only when the latest Sleep/Wake entry is a Wake.
pub fn is_awake(entries: &[Entry]) -> bool {
    sleep_state(entries) == Some(SleepState::Awake)
}

/// Elapsed time from `entry` to `now`, formatted.
pub fn time_since_entry(entry: Option<&Entry>, now: DateTime<Utc>) -> Option<String> {
    entry.map(|e| format_elapsed(elapsed_ms(e, now)))
}

/// Elapsed time since the most recent entry of `kind`.
///
/// Returns `None` when there is no such entry; front ends render that as
/// "No entries found".
pub fn time_since_last(entries: &[Entry], kind: EntryType, now: DateTime<Utc>) -> Option<String> {
    time_since_entry(entries.iter().find(|e| e.kind == kind), now)
}

/// Sentence describing the subject's current sleep state.
///
/// Falls back to `"{subject}'s overview"` when the state is unknown.
pub fn current_status(entries: &[Entry], now: DateTime<Utc>, subject: &str) -> String {
    let Some(latest) = latest_sleep_or_wake(entries) else {
        return format!("{subject}'s overview");
    };
    let state = state_after(latest);
    let elapsed = format_elapsed(elapsed_ms(latest, now));
    format!("{subject}'s been {state} for {elapsed}")
}

fn elapsed_ms(entry: &Entry, now: DateTime<Utc>) -> i64 {
    (now - entry.timestamp).num_milliseconds()
}

/// Caption for a log row relative to now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relative {
    /// The entry is in the past; holds the formatted elapsed time.
    Ago(String),
    /// The entry is scheduled at least a second into the future.
    Upcoming,
}

impl Relative {
    pub fn of(entry: &Entry, now: DateTime<Utc>) -> Self {
        let ms = elapsed_ms(entry, now);
        if ms / 1_000 < 0 {
            Self::Upcoming
        } else {
            Self::Ago(format_elapsed(ms))
        }
    }
}

impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ago(elapsed) => write!(f, "{elapsed} ago"),
            Self::Upcoming => f.write_str("Upcoming"),
        }
    }
}
