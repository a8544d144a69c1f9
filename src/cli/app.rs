//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use gazette_digest::core::models::DropCategory;
use gazette_digest::output::OutputMode;
use gazette_digest::paths;

/// gazette-digest - Official Gazette digest by email
#[derive(Parser, Debug)]
#[command(
    name = "gazette-digest",
    version,
    about = "Official Gazette digest by email",
    long_about = "Official Gazette digest by email.\n\n\
                  Collects the day's Resmi Gazete index, filters out routine noise and emails\n\
                  the remaining entries grouped by section.\n\n\
                  Suppressed by default: university regulations, announcement-section notices\n\
                  and central bank currency bulletins. Appointments are kept unless enabled."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file [default: <config dir>/gazette-digest/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Collect today's issue, filter it and send the digest
    Run(RunArgs),

    /// List the filter rules in precedence order
    Rules,

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Options of the `run` command
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Build the digest and print it without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Recipient address, overriding config and TO_EMAIL
    #[arg(long, value_name = "EMAIL")]
    pub to: Option<String>,

    /// Read a saved feed or index page instead of fetching
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Keep a category this run (university, announcement, central-bank, appointment)
    #[arg(long, value_name = "CATEGORY")]
    pub include: Vec<DropCategory>,

    /// Suppress a category this run
    #[arg(long, value_name = "CATEGORY")]
    pub suppress: Vec<DropCategory>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env before the logger so RUST_LOG may come from it
    let env_loaded = dotenvy::from_path(paths::env_file());

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match env_loaded {
        Ok(()) => log::debug!("Loaded {}", paths::ENV_FILE),
        Err(e) if e.not_found() => {},
        Err(e) => log::warn!("Ignoring {}: {e}", paths::ENV_FILE),
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Run(args)) => commands::run(args, config_path, output_mode),
        Some(Command::Rules) => commands::rules(config_path, output_mode),
        Some(Command::Config) => commands::config(config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": gazette_digest::VERSION
                    })
                );
            } else {
                println!("gazette-digest v{}", gazette_digest::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": gazette_digest::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("gazette-digest v{}", gazette_digest::VERSION);
                println!("\nRun 'gazette-digest --help' for usage");
                println!("Run 'gazette-digest run --dry-run' to preview today's digest");
            }
            Ok(())
        },
    }
}
