use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pawprint_cli::commands::{clear, delete, edit, list, log, prune, status, types};
use pawprint_cli::{Cli, Commands, Config};
use pawprint_db::{Database, EntryRepository};

/// Load config and open the entry repository, ensuring the parent directory exists.
fn open_repository(config_path: Option<&Path>) -> Result<(EntryRepository, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = Database::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))?;
    let repo = EntryRepository::new(db).context("failed to read entries")?;
    Ok((repo, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();
    let now = Utc::now();

    match &cli.command {
        Some(Commands::Log(args)) => {
            let (repo, _config) = open_repository(cli.config.as_deref())?;
            log::run(&mut stdout, &repo, args, now)?;
        }
        Some(Commands::List(args)) => {
            let (repo, _config) = open_repository(cli.config.as_deref())?;
            list::run(&mut stdout, &repo, args, now, &Local)?;
        }
        Some(Commands::Status(args)) => {
            let (repo, config) = open_repository(cli.config.as_deref())?;
            status::run(&mut stdout, &repo, &config, args, now)?;
        }
        Some(Commands::Edit(args)) => {
            let (mut repo, _config) = open_repository(cli.config.as_deref())?;
            edit::run(&mut stdout, &mut repo, args, now)?;
        }
        Some(Commands::Delete(args)) => {
            let (repo, _config) = open_repository(cli.config.as_deref())?;
            delete::run(&mut stdout, &repo, args)?;
        }
        Some(Commands::Clear(args)) => {
            let (repo, _config) = open_repository(cli.config.as_deref())?;
            clear::run(&mut stdout, &repo, args)?;
        }
        Some(Commands::Prune(args)) => {
            let (repo, _config) = open_repository(cli.config.as_deref())?;
            prune::run(&mut stdout, &repo, args, now)?;
        }
        Some(Commands::Types) => {
            types::run(&mut stdout)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
