//! Logged pet-care events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry_type::EntryType;
use crate::types::EntryId;

/// A single pet-care event.
///
/// Entries are immutable values. Changing one means deleting it and inserting
/// a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// What happened.
    #[serde(rename = "type")]
    pub kind: EntryType,
    /// Optional free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When it happened. May lie in the future for planned events.
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry stamped with the current time and a fresh ID.
    pub fn now(kind: EntryType, note: Option<String>) -> Self {
        Self::at(kind, note, Utc::now())
    }

    /// Creates an entry at a user-picked time with a fresh ID.
    pub fn at(kind: EntryType, note: Option<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::generate(),
            kind,
            note: note.filter(|n| !n.trim().is_empty()),
            timestamp,
        }
    }

    /// Label shown in the log: the note if present, otherwise the type name.
    pub fn label(&self) -> &str {
        self.note.as_deref().unwrap_or_else(|| self.kind.as_str())
    }
}
