//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use skillpath_model::Difficulty;

#[derive(Parser)]
#[command(
    name = "skillpath",
    version,
    about = "Skillpath - prerequisite-aware learning catalog",
    long_about = "Inspect a learning catalog, resolve which units a learner\n\
                  may access, and track completion across sessions.\n\n\
                  Catalogs are validated on load: dangling references,\n\
                  prerequisite cycles, and inconsistent edge lists are fatal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a catalog and print its structural summary.
    Check {
        /// Path to the catalog JSON file.
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },

    /// List catalog nodes, optionally filtered and sorted.
    List(ListArgs),

    /// Show one node with its prerequisites and children.
    Show {
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Node id to display.
        #[arg(value_name = "NODE_ID")]
        id: String,

        /// Progress file used to resolve statuses.
        #[arg(long = "progress", value_name = "PATH")]
        progress: Option<PathBuf>,
    },

    /// Mark a node completed and persist the progress file.
    Complete {
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Node id to mark completed.
        #[arg(value_name = "NODE_ID")]
        id: String,

        /// Progress file to update (created if absent).
        #[arg(long = "progress", value_name = "PATH")]
        progress: PathBuf,
    },

    /// Print a learner's progress dashboard.
    Summary {
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Progress file; omit for a fresh session.
        #[arg(long = "progress", value_name = "PATH")]
        progress: Option<PathBuf>,
    },

    /// Emit node anchors and connector geometry as JSON for a renderer.
    Layout {
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Progress file used to classify edges; omit for a fresh session.
        #[arg(long = "progress", value_name = "PATH")]
        progress: Option<PathBuf>,
    },
}

#[derive(Parser)]
pub struct ListArgs {
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Progress file used to resolve a status column.
    #[arg(long = "progress", value_name = "PATH")]
    pub progress: Option<PathBuf>,

    /// Case-insensitive text filter over title, description, and tags.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Keep only nodes in this category.
    #[arg(long = "category", value_name = "NAME")]
    pub category: Option<String>,

    /// Keep only nodes of this difficulty.
    #[arg(long = "difficulty", value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Keep only nodes at this authored level.
    #[arg(long = "level", value_name = "N")]
    pub level: Option<u32>,

    /// Sort order for the listing.
    #[arg(long = "sort", value_enum, default_value = "declaration")]
    pub sort: SortArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Declaration,
    Title,
    Difficulty,
    Status,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
