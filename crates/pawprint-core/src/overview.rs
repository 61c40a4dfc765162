//! Snapshot of everything the overview screen shows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entry::Entry;
use crate::entry_type::EntryType;
use crate::status::{Relative, SleepState, current_status, sleep_state, time_since_last};

/// Time since the latest entry of one tracked type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedSince {
    #[serde(rename = "type")]
    pub kind: EntryType,
    /// `None` when nothing of this type has been logged.
    pub elapsed: Option<String>,
}

/// A log row with its caption relative to now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    #[serde(flatten)]
    pub entry: Entry,
    pub caption: String,
}

/// Derived view of the journal at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub status: String,
    pub state: Option<SleepState>,
    pub tracked: Vec<TrackedSince>,
    pub rows: Vec<EntryRow>,
}

impl Overview {
    /// Builds the snapshot from entries ordered newest first.
    pub fn build(entries: &[Entry], now: DateTime<Utc>, subject: &str, tracked: &[EntryType]) -> Self {
        let tracked = tracked
            .iter()
            .map(|&kind| TrackedSince {
                kind,
                elapsed: time_since_last(entries, kind, now),
            })
            .collect();
        let rows = entries
            .iter()
            .map(|entry| EntryRow {
                entry: entry.clone(),
                caption: Relative::of(entry, now).to_string(),
            })
            .collect();

        Self {
            status: current_status(entries, now, subject),
            state: sleep_state(entries),
            tracked,
            rows,
        }
    }
}
