//! Spectr CLI - Command-line interface for Spectr workspaces
//!
//! This is the main entry point for users interacting with Spectr.
//! It locates workspace roots and lists what lives inside them.

use clap::{Parser, Subcommand};
use colored::Colorize;
use spectr_core::DiscoveryOptions;
use spectr_discovery::RootFinder;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "spectr")]
#[command(author = "Spectr Contributors")]
#[command(version)]
#[command(about = "Spec-driven development workspaces", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Discovery options file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a Spectr workspace
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show every workspace root reachable from a directory
    Roots {
        /// Directory to search from (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the closest workspace root
    Root {
        /// Directory to search from (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List active changes, or specs
    List {
        /// Directory to search from (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// List specs instead of changes
        #[arg(long)]
        specs: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = match &cli.config {
        Some(path) => {
            debug!("Loading discovery options from {}", path.display());
            DiscoveryOptions::from_file(path)?
        }
        None => DiscoveryOptions::default(),
    };
    let finder = RootFinder::new(options.clone());

    match cli.command {
        Commands::Init { path } => commands::init(&path, &options),
        Commands::Roots { path, json } => commands::roots(&finder, &path, json),
        Commands::Root { path } => commands::root(&finder, &path),
        Commands::List { path, specs, json } => commands::list(&finder, &path, specs, json),
    }
}
