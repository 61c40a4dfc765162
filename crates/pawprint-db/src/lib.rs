//! Storage layer for the PawPrint journal.
//!
//! Provides persistence for entries using `rusqlite`, and an
//! [`EntryRepository`] that publishes the ordered entry list to observers
//! after every committed write.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! A `Database` instance can be moved between threads but cannot be shared
//! across threads without external synchronization. Writes are serialized by
//! owning the connection; there is no locking at this layer.
//!
//! # Schema
//!
//! A single `entries` table. Timestamps are stored as TEXT in RFC 3339 UTC
//! with millisecond precision (e.g., `2024-01-15T10:30:00.000Z`), so
//! lexicographic ordering matches chronological ordering. The `type` column
//! holds the [`EntryType`] name; a value that does not parse is reported as
//! [`DbError::InvalidEntryType`] rather than defaulted.

mod repository;

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use pawprint_core::{Entry, EntryId, EntryType, ValidationError};
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use thiserror::Error;

pub use repository::EntryRepository;

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored entry type could not be interpreted.
    #[error("invalid entry type for entry {entry_id}: {value}")]
    InvalidEntryType { entry_id: String, value: String },
    /// Failed to parse a stored timestamp.
    #[error("invalid timestamp for entry {entry_id}: {timestamp}")]
    TimestampParse {
        entry_id: String,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored ID failed validation.
    #[error("invalid entry id: {0}")]
    InvalidId(#[from] ValidationError),
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

const SELECT_ENTRIES: &str = "SELECT id, type, notes, timestamp FROM entries";

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            -- timestamp: RFC 3339 UTC with millis (e.g., '2024-01-15T10:30:00.000Z')
            -- type: entry type name (e.g., 'Sleep')
            CREATE TABLE IF NOT EXISTS entries (
                id TEXT PRIMARY KEY,
                type TEXT NOT NULL,
                notes TEXT,
                timestamp TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_entries_timestamp ON entries(timestamp);
            ",
        )?;
        Ok(())
    }

    /// Inserts an entry, replacing any existing entry with the same ID.
    pub fn insert_entry(&self, entry: &Entry) -> Result<(), DbError> {
        insert_with(&self.conn, entry)?;
        tracing::debug!(id = %entry.id, kind = %entry.kind, "inserted entry");
        Ok(())
    }

    /// Deletes an entry by ID. Returns whether a row was removed.
    pub fn delete_entry(&self, id: &EntryId) -> Result<bool, DbError> {
        let removed = self
            .conn
            .execute("DELETE FROM entries WHERE id = ?", [id.as_str()])?;
        tracing::debug!(%id, removed, "deleted entry");
        Ok(removed > 0)
    }

    /// Deletes every entry. Returns the number of rows removed.
    pub fn delete_all(&self) -> Result<usize, DbError> {
        let removed = self.conn.execute("DELETE FROM entries", [])?;
        tracing::debug!(removed, "cleared entries");
        Ok(removed)
    }

    /// Deletes entries older than `cutoff`. Returns the number of rows removed.
    pub fn prune_before(&self, cutoff: DateTime<Utc>) -> Result<usize, DbError> {
        let removed = self.conn.execute(
            "DELETE FROM entries WHERE timestamp < ?",
            [format_timestamp(cutoff)],
        )?;
        tracing::debug!(removed, %cutoff, "pruned entries");
        Ok(removed)
    }

    /// Replaces the entry `old` with `new` in one transaction.
    ///
    /// Entries are immutable, so an edit is a delete followed by an insert.
    /// Returns `false` without writing anything when `old` does not exist.
    pub fn replace_entry(&mut self, old: &EntryId, new: &Entry) -> Result<bool, DbError> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM entries WHERE id = ?", [old.as_str()])?;
        if removed == 0 {
            return Ok(false);
        }
        insert_with(&tx, new)?;
        tx.commit()?;
        tracing::debug!(%old, new = %new.id, "replaced entry");
        Ok(true)
    }

    /// Lists all entries, newest first. Ties are ordered by ID.
    pub fn list_entries(&self) -> Result<Vec<Entry>, DbError> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_ENTRIES} ORDER BY timestamp DESC, id ASC"))?;
        let rows = stmt.query_map([], StoredEntry::from_row)?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.into_entry()?);
        }
        Ok(entries)
    }

    /// Looks up a single entry.
    pub fn get_entry(&self, id: &EntryId) -> Result<Option<Entry>, DbError> {
        let stored = self
            .conn
            .query_row(
                &format!("{SELECT_ENTRIES} WHERE id = ?"),
                [id.as_str()],
                StoredEntry::from_row,
            )
            .optional()?;
        stored.map(StoredEntry::into_entry).transpose()
    }

    /// Looks up the entries with the given IDs, newest first.
    ///
    /// Unknown IDs are skipped.
    pub fn find_entries_with_ids(&self, ids: &[EntryId]) -> Result<Vec<Entry>, DbError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_ENTRIES} WHERE id IN ({placeholders}) ORDER BY timestamp DESC, id ASC"
        ))?;
        let rows = stmt.query_map(
            params_from_iter(ids.iter().map(EntryId::as_str)),
            StoredEntry::from_row,
        )?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.into_entry()?);
        }
        Ok(entries)
    }
}

fn insert_with(conn: &Connection, entry: &Entry) -> Result<(), DbError> {
    conn.execute(
        "INSERT OR REPLACE INTO entries (id, type, notes, timestamp) VALUES (?, ?, ?, ?)",
        params![
            entry.id.as_str(),
            entry.kind.as_str(),
            entry.note,
            format_timestamp(entry.timestamp),
        ],
    )?;
    Ok(())
}

/// A row as stored, before the type and timestamp are interpreted.
struct StoredEntry {
    id: String,
    kind: String,
    notes: Option<String>,
    timestamp: String,
}

impl StoredEntry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            kind: row.get(1)?,
            notes: row.get(2)?,
            timestamp: row.get(3)?,
        })
    }

    fn into_entry(self) -> Result<Entry, DbError> {
        let kind: EntryType = self.kind.parse().map_err(|_| DbError::InvalidEntryType {
            entry_id: self.id.clone(),
            value: self.kind.clone(),
        })?;
        let timestamp = parse_timestamp(&self.timestamp, &self.id)?;
        Ok(Entry {
            id: EntryId::new(self.id)?,
            kind,
            note: self.notes,
            timestamp,
        })
    }
}

fn parse_timestamp(timestamp: &str, entry_id: &str) -> Result<DateTime<Utc>, DbError> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| DbError::TimestampParse {
            entry_id: entry_id.to_string(),
            timestamp: timestamp.to_string(),
            source,
        })
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
