//! Status command for the sleep/wake sentence and "time since" summary.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

use pawprint_core::Overview;
use pawprint_db::EntryRepository;

use crate::Config;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Output JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

pub fn run<W: Write>(
    writer: &mut W,
    repo: &EntryRepository,
    config: &Config,
    args: &StatusArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    let overview = Overview::build(&repo.entries(), now, &config.pet_name, &config.tracked_types);

    if args.json {
        writeln!(writer, "{}", serde_json::to_string(&overview)?)?;
    } else {
        write!(writer, "{}", format_status(&overview))?;
    }
    Ok(())
}

/// Render the status sentence followed by one "Last ..." line per tracked type.
pub fn format_status(overview: &Overview) -> String {
    let mut output = String::new();
    writeln!(output, "{}", overview.status).unwrap();

    for tracked in &overview.tracked {
        let label = tracked.kind.as_str().to_lowercase();
        match &tracked.elapsed {
            Some(elapsed) => writeln!(output, "Last {label}: {elapsed} ago").unwrap(),
            None => writeln!(output, "Last {label}: No entries found").unwrap(),
        }
    }

    output
}
