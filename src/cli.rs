//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use quire::core::models::Status;
use quire::output::OutputMode;

/// quire - Inspect the content of a Jekyll-style blog
#[derive(Parser, Debug)]
#[command(
    name = "quire",
    version,
    about = "Inspect the posts and drafts of a static blog",
    long_about = "Load the posts and drafts of a Jekyll-style site and query them.\n\n\
                  Documents carry YAML front matter; published posts must be dated.\n\
                  Files that fail validation are reported by `quire check`."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Site root directory
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List documents
    List(ListArgs),

    /// Show one document
    Show {
        /// Logical path (e.g., /posts/slick-tx)
        path: String,
    },

    /// List tags with document counts
    Tags,

    /// List categories with document counts
    Categories,

    /// Show published documents grouped by year
    Archive,

    /// Validate every document and report rejected files
    Check,

    /// Show version
    Version,
}

#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Filter by status: draft, published
    #[arg(short, long)]
    pub status: Option<Status>,

    /// Filter by tag (exact match)
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Filter by category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by author (exact match)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Order by date, newest first; undated documents are left out
    #[arg(long)]
    pub by_date: bool,

    /// With --by-date, oldest first
    #[arg(long, requires = "by_date")]
    pub ascending: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::List(args)) => commands::list(&cli.root, &args, output_mode),
        Some(Command::Show { path }) => commands::show(&cli.root, &path, output_mode),
        Some(Command::Tags) => commands::tags(&cli.root, output_mode),
        Some(Command::Categories) => commands::categories(&cli.root, output_mode),
        Some(Command::Archive) => commands::archive(&cli.root, output_mode),
        Some(Command::Check) => commands::check(&cli.root, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("quire v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("quire v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'quire --help' for usage");
                println!("Run 'quire list' inside a site directory to get started");
            }
            Ok(())
        },
    }
}
