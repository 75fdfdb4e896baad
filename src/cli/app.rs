//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, CatalogArgs, RecommendArgs};
use recommender::output::OutputMode;

/// recommender - Match a catalog of options against your preferences
#[derive(Parser, Debug)]
#[command(
    name = "recommender",
    version,
    about = "Match a catalog of options against your preferences",
    long_about = "Find options that fit your mood and the time you have.\n\n\
                  Each preference you leave out matches everything.\n\
                  Results keep catalog order."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Catalog file (.toml or .json); defaults to config, then built-in
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend options that match your preferences
    Recommend {
        /// Desired mood (exact match)
        #[arg(short, long)]
        mood: Option<String>,

        /// Available time in minutes, fractions allowed (0 = no limit)
        #[arg(short, long, allow_hyphen_values = true)]
        time: Option<String>,

        /// Desired category
        #[arg(short, long)]
        category: Option<String>,

        /// Also require the category to match
        #[arg(long)]
        strict_category: bool,

        /// Show a match score and label on each card
        #[arg(long)]
        scores: bool,
    },

    /// List every option in the catalog
    Catalog,

    /// Show the label for a match score
    Message {
        /// Number of satisfied criteria
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let catalog_args = CatalogArgs { path: cli.catalog };

    match cli.command {
        Some(Command::Recommend {
            mood,
            time,
            category,
            strict_category,
            scores,
        }) => {
            let args = RecommendArgs {
                mood,
                time,
                category,
                strict_category,
                scores,
            };
            commands::recommend(&args, &catalog_args, output_mode)
        },
        Some(Command::Catalog) => commands::catalog(&catalog_args, output_mode),
        Some(Command::Message { score }) => commands::message(score, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("recommender v{}", env!("CARGO_PKG_VERSION"));
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
                println!("recommender v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'recommender --help' for usage");
                println!("Run 'recommender recommend --mood relaxed --time 45' to get started");
            }
            Ok(())
        },
    }
}
