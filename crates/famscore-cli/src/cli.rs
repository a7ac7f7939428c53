//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Famscore - Family financial health scoring
#[derive(Parser)]
#[command(name = "famscore")]
#[command(about = "Financial health scoring for family metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the scoring API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Score a metrics JSON object without starting the server
    Score {
        /// JSON file containing the metrics object (reads stdin if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the API-shaped JSON response instead of plain text
        #[arg(long)]
        json: bool,
    },
}
