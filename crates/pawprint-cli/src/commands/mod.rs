//! CLI subcommand implementations.

pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod log;
pub mod prune;
pub mod status;
pub mod types;
pub mod util;
