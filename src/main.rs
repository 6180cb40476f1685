//! patch-notes: terminal viewer for game patch notes.

#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use patch_notes::{
    cli,
    config::ViewConfig,
    model::DEFAULT_WINDOW_MONTHS,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "patch-notes")]
#[command(version)]
#[command(about = "Browse game patch notes in the terminal", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Dataset missing, unparseable or empty
    2  Error occurred

EXAMPLES:
    # Browse the embedded sample dataset
    patch-notes view

    # Browse a generated dataset, keeping everything regardless of age
    patch-notes view data/patches.json --no-prune

    # Jump straight to a release
    patch-notes view data/patches.json --select 4.2.0

    # Pipe-friendly output
    patch-notes view data/patches.json -o json > notes.json

    # CI check after regenerating the dataset
    patch-notes check data/patches.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `view` subcommand
#[derive(Parser)]
struct ViewArgs {
    /// Dataset file (embedded sample if not given)
    dataset: Option<PathBuf>,

    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Recency window in months; dated patches older than this are hidden
    #[arg(long, default_value_t = DEFAULT_WINDOW_MONTHS)]
    window_months: u32,

    /// Keep all patches regardless of age
    #[arg(long)]
    no_prune: bool,

    /// Select this version initially instead of the newest patch
    #[arg(long)]
    select: Option<String>,
}

/// Arguments for the `check` subcommand
#[derive(Parser)]
struct CheckArgs {
    /// Dataset file (embedded sample if not given)
    dataset: Option<PathBuf>,

    /// Recency window in months
    #[arg(long, default_value_t = DEFAULT_WINDOW_MONTHS)]
    window_months: u32,

    /// Keep all patches regardless of age
    #[arg(long)]
    no_prune: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse patch notes interactively (or print a report)
    View(ViewArgs),

    /// Validate a dataset without opening the UI
    Check(CheckArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::View(args) => {
            let config = ViewConfig {
                dataset_path: args.dataset,
                format: args.output,
                window_months: args.window_months,
                no_prune: args.no_prune,
                select_version: args.select,
                no_color: cli.no_color,
                quiet: cli.quiet,
            };

            let exit_code = cli::run_view(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Check(args) => {
            let config = ViewConfig {
                dataset_path: args.dataset,
                window_months: args.window_months,
                no_prune: args.no_prune,
                quiet: cli.quiet,
                ..ViewConfig::default()
            };

            let exit_code = cli::run_check(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "patch-notes", &mut io::stdout());
            Ok(())
        }
    }
}
