//! Log command for recording a new entry.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use pawprint_core::{Entry, EntryType};
use pawprint_db::EntryRepository;

use super::util::parse_when;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Entry type (sleep, wake, pee, poop, feed).
    pub kind: EntryType,
    /// Optional note.
    #[arg(short, long)]
    pub note: Option<String>,
    /// When it happened, if not now (e.g. "20 minutes ago", "in 1 hour").
    #[arg(long)]
    pub at: Option<String>,
}

pub fn run<W: Write>(
    writer: &mut W,
    repo: &EntryRepository,
    args: &LogArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    let timestamp = match &args.at {
        Some(when) => parse_when(when, now)?,
        None => now,
    };

    let entry = Entry::at(args.kind, args.note.clone(), timestamp);
    repo.insert(&entry)?;
    tracing::info!(id = %entry.id, kind = %entry.kind, "logged entry");

    writeln!(writer, "{}", entry.id)?;
    Ok(())
}
