//! bilingo CLI - side-by-side bilingual documentation builder.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "bilingo")]
#[command(about = "Side-by-side bilingual documentation builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to bilingo.toml config file
    #[arg(short, long, default_value = "bilingo.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a documentation project in the current directory
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Concatenate and render the documents into one HTML artifact
    Build {
        /// Artifact path (defaults to config or "interpretation/dest/content.html")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the two-level navigation outline of an artifact
    Outline {
        /// Artifact path or URL (defaults to the configured artifact)
        #[arg(short, long)]
        source: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load an artifact into the page shell and write the assembled page
    Page {
        /// Artifact path or URL (defaults to the configured artifact)
        #[arg(short, long)]
        source: Option<String>,

        /// Output file (defaults to config or "interpretation/dest/index.html")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Build { output } => {
            commands::build::run(&cli.config, output)?;
        }
        Commands::Outline { source, json } => {
            commands::outline::run(&cli.config, source, json).await?;
        }
        Commands::Page { source, output } => {
            commands::page::run(&cli.config, source, output).await?;
        }
    }

    Ok(())
}
