//! Edit command. Entries are immutable, so an edit deletes the entry and
//! inserts the changed copy under the same ID.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::Args;

use pawprint_core::{Entry, EntryType};
use pawprint_db::EntryRepository;

use super::util::{parse_when, resolve_entry};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Entry ID or unique prefix.
    pub id: String,
    /// New entry type.
    #[arg(long = "type")]
    pub kind: Option<EntryType>,
    /// New note.
    #[arg(short, long, conflicts_with = "clear_note")]
    pub note: Option<String>,
    /// Remove the note.
    #[arg(long)]
    pub clear_note: bool,
    /// New time (e.g. "10 minutes ago", "2026-01-15 07:30").
    #[arg(long)]
    pub at: Option<String>,
}

pub fn run<W: Write>(
    writer: &mut W,
    repo: &mut EntryRepository,
    args: &EditArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    if args.kind.is_none() && args.note.is_none() && !args.clear_note && args.at.is_none() {
        bail!("nothing to change; pass --type, --note, --clear-note or --at");
    }

    let current = resolve_entry(repo, &args.id)?;
    let timestamp = match &args.at {
        Some(when) => parse_when(when, now)?,
        None => current.timestamp,
    };
    let note = if args.clear_note {
        None
    } else {
        args.note
            .clone()
            .or_else(|| current.note.clone())
            .filter(|n| !n.trim().is_empty())
    };
    let updated = Entry {
        id: current.id.clone(),
        kind: args.kind.unwrap_or(current.kind),
        note,
        timestamp,
    };

    if !repo.replace(&current.id, &updated)? {
        bail!("entry not found: {}", current.id);
    }
    tracing::info!(id = %updated.id, "edited entry");

    writeln!(writer, "Updated {}", updated.id)?;
    Ok(())
}
