//! List command for showing the rolling log.

use std::fmt::{Display, Write as _};
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use clap::Args;

use pawprint_core::{Entry, Relative};
use pawprint_db::EntryRepository;

use super::util::short_id;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show at most this many entries.
    #[arg(short = 'n', long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
    /// Output JSON lines instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W, Tz>(
    writer: &mut W,
    repo: &EntryRepository,
    args: &ListArgs,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let entries = repo.entries();
    let shown = &entries[..args.limit.unwrap_or(entries.len()).min(entries.len())];

    if args.json {
        for entry in shown {
            writeln!(writer, "{}", serde_json::to_string(entry)?)?;
        }
        return Ok(());
    }

    if shown.is_empty() && !entries.is_empty() {
        return Ok(());
    }
    write!(writer, "{}", format_log(shown, now, tz))?;
    Ok(())
}

/// Render entries as one line each: short ID, local time, glyph, label, caption.
pub fn format_log<Tz>(entries: &[Entry], now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut output = String::new();

    if entries.is_empty() {
        writeln!(output, "No entries yet. Record one with 'pawprint log <type>'.").unwrap();
        return output;
    }

    for entry in entries {
        let local = entry.timestamp.with_timezone(tz);
        writeln!(
            output,
            "{:<8}  {}  {} {} ({})",
            short_id(entry),
            local.format("%Y-%m-%d %H:%M"),
            entry.kind.asset().glyph,
            entry.label(),
            Relative::of(entry, now),
        )
        .unwrap();
    }

    output
}
