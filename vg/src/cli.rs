//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// viaggio - personal Modena travel planner backed by Gemini
#[derive(Parser)]
#[command(
    name = "vg",
    about = "Personal Modena travel planner backed by Gemini",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate a multi-day itinerary
    Plan {
        /// Trip length in days (clamped to 1-7)
        #[arg(short, long, default_value = "3")]
        days: u8,

        /// Interest tag (repeatable); defaults to Food and Motors
        #[arg(short, long = "interest", value_name = "TAG")]
        interests: Vec<String>,
    },

    /// Ask the live-web concierge a question
    Ask {
        /// Free-text query; omit to list the quick queries
        query: Vec<String>,
    },

    /// Generate a 16:9 travel photo for a prompt
    Image {
        /// Subject of the photo
        prompt: Vec<String>,

        /// Output file (defaults to <image-dir>/viaggio-image.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the experience gallery catalog
    Gallery,
}
