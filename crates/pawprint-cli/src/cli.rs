//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::clear::ClearArgs;
use crate::commands::delete::DeleteArgs;
use crate::commands::edit::EditArgs;
use crate::commands::list::ListArgs;
use crate::commands::log::LogArgs;
use crate::commands::prune::PruneArgs;
use crate::commands::status::StatusArgs;

/// Pet-care journal.
///
/// Logs sleep, wake, feeding and elimination events and reports how long
/// it has been since each.
#[derive(Debug, Parser)]
#[command(name = "pawprint", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record an entry, now or at a given time.
    Log(LogArgs),

    /// Show the log, newest first.
    List(ListArgs),

    /// Show the current sleep status and time since tracked events.
    Status(StatusArgs),

    /// Change an entry's type, note or time.
    Edit(EditArgs),

    /// Delete a single entry.
    Delete(DeleteArgs),

    /// Delete every entry.
    Clear(ClearArgs),

    /// Delete entries older than a number of days.
    Prune(PruneArgs),

    /// List the entry types that can be logged.
    Types,
}
