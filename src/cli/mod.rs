//! Command-line interface for bookshelf.
//!
//! Runs the interactive shell by default; `config` prints the resolved
//! configuration for debugging.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::config::ResolvedConfig;
use crate::library::Catalog;

pub mod shell;

pub use shell::{Shell, ShellSettings};

/// bookshelf - In-memory library of books and ebooks
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (overrides BOOKSHELF_CONFIG and discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Shell,

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self, config: &ResolvedConfig) -> Result<()> {
        match self.command.unwrap_or(Commands::Shell) {
            Commands::Shell => run_shell(config),
            Commands::Config => show_config(config),
        }
    }
}

/// Build the startup catalog from configured seed records
pub fn seed_catalog(config: &ResolvedConfig) -> Catalog {
    let (catalog, rejected) = Catalog::with_records(config.seed.iter().cloned());

    for err in &rejected {
        warn!(isbn = err.identifier(), "Skipping seed record: {}", err);
    }
    if !config.seed.is_empty() {
        info!(
            seeded = catalog.len(),
            skipped = rejected.len(),
            "Catalog seeded from config"
        );
    }

    catalog
}

/// Run the interactive shell on stdin/stdout
fn run_shell(config: &ResolvedConfig) -> Result<()> {
    let catalog = seed_catalog(config);
    let settings = ShellSettings {
        banner: config.banner.clone(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(catalog, stdin.lock(), stdout.lock(), settings);
    shell.run()
}

/// Show resolved configuration
fn show_config(config: &ResolvedConfig) -> Result<()> {
    println!("bookshelf configuration");
    println!();
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("Version:     {}", config.version);
    println!("Banner:      {}", config.banner);
    println!("Log level:   {}", config.log_level);
    println!("Seed books:  {}", config.seed.len());

    Ok(())
}
