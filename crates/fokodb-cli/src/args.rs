use clap::{Args, Parser, Subcommand};
use fokodb_core::{LevelFilter, DEFAULT_TREE_LIMIT};
use std::path::PathBuf;

/// CLI arguments for fokodb
#[derive(Debug, Parser)]
#[command(
    name = "fokodb",
    version,
    about = "Search Madagascar's regions, districts, communes and fokontany"
)]
pub struct CliArgs {
    /// Path to the dataset (JSON, optionally gzip-compressed). Defaults to the
    /// bundled `data/reg.json` of fokodb-core.
    #[arg(short = 'i', long = "input", env = "FOKODB_DATA", global = true)]
    pub input: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Term plus level filter, shared by every search-driven command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search term (at least 2 characters, case-insensitive)
    pub term: String,

    /// Only report one level: region, district, commune, fokontany or all
    #[arg(short = 'l', long = "level", default_value = "all")]
    pub level: LevelFilter,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many nodes each level holds
    Stats,

    /// List regions by name
    Regions {
        /// Only regions whose name contains this text
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
    },

    /// Ranked search across every level
    Search {
        #[command(flatten)]
        search: SearchArgs,

        /// Show at most this many results
        #[arg(short = 'n', long = "limit")]
        limit: Option<usize>,
    },

    /// Parents, children and siblings of one search result
    Context {
        #[command(flatten)]
        search: SearchArgs,

        /// Which result to expand (0 = best match)
        #[arg(short = 'p', long = "pick", default_value_t = 0)]
        pick: usize,
    },

    /// One-level tree under a search result
    Tree {
        #[command(flatten)]
        search: SearchArgs,

        /// Which result to expand (0 = best match)
        #[arg(short = 'p', long = "pick", default_value_t = 0)]
        pick: usize,

        /// Maximum number of children to show
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TREE_LIMIT)]
        limit: usize,

        /// Show every child instead of a capped tree
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },
}
