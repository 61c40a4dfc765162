//! Delete command for removing a single entry.

use std::io::Write;

use anyhow::{Result, bail};
use clap::Args;

use pawprint_db::EntryRepository;

use super::util::resolve_entry;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Entry ID or unique prefix.
    pub id: String,
}

pub fn run<W: Write>(writer: &mut W, repo: &EntryRepository, args: &DeleteArgs) -> Result<()> {
    let entry = resolve_entry(repo, &args.id)?;
    if !repo.delete(&entry.id)? {
        bail!("entry not found: {}", entry.id);
    }
    tracing::info!(id = %entry.id, "deleted entry");

    writeln!(writer, "Deleted {} ({})", entry.id, entry.label())?;
    Ok(())
}
