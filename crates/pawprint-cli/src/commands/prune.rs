//! Prune command for dropping old entries.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use clap::Args;

use pawprint_db::EntryRepository;

#[derive(Debug, Args)]
pub struct PruneArgs {
    /// Delete entries older than this many days.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub older_than: u32,
}

pub fn run<W: Write>(
    writer: &mut W,
    repo: &EntryRepository,
    args: &PruneArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    let Some(cutoff) = Duration::try_days(i64::from(args.older_than))
        .and_then(|age| now.checked_sub_signed(age))
    else {
        bail!("--older-than {} days reaches before the earliest representable date", args.older_than);
    };
    let removed = repo.prune_before(cutoff)?;
    tracing::info!(removed, %cutoff, "pruned journal");

    writeln!(
        writer,
        "Deleted {removed} entries older than {} days",
        args.older_than
    )?;
    Ok(())
}
