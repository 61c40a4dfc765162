//! Core domain logic for the PawPrint pet-care journal.
//!
//! This crate contains the fundamental types and logic for:
//! - Entries: immutable records of a single pet-care event
//! - Elapsed time: rendering durations as "2 hours 5 minutes"
//! - Status: deriving the sleep/wake sentence and "time since last" values

pub mod elapsed;
pub mod entry;
pub mod entry_type;
pub mod overview;
pub mod status;
pub mod types;

pub use elapsed::{format_duration, format_elapsed, pluralise};
pub use entry::Entry;
pub use entry_type::{DisplayAsset, EntryType, UnknownEntryType};
pub use overview::{EntryRow, Overview, TrackedSince};
pub use status::{
    Relative, SleepState, current_status, is_awake, sleep_state, time_since_entry,
    time_since_last,
};
pub use types::{EntryId, ValidationError};
