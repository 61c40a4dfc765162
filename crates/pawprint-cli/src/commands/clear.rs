//! Clear command for deleting every entry.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;

use pawprint_db::EntryRepository;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Confirm deleting all entries.
    #[arg(long)]
    pub yes: bool,
}

pub fn run<W: Write>(writer: &mut W, repo: &EntryRepository, args: &ClearArgs) -> Result<()> {
    if !args.yes {
        let count = repo.entries().len();
        bail!("refusing to delete {count} entries without --yes");
    }

    let removed = repo.delete_all()?;
    tracing::info!(removed, "cleared journal");
    writeln!(writer, "Deleted {removed} entries")?;
    Ok(())
}
