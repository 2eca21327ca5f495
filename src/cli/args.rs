//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Elf village branch network: grow a deterministic forest, seat elves, count neighbours
#[derive(Parser, Debug)]
#[command(name = "branchnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath, env = "BRANCHNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generator seed (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// Number of trees (overrides config)
    #[arg(long, global = true)]
    pub trees: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seat elves and count the neighbours of one of them
    Search {
        /// Elf name to look for
        name: String,
        /// Roster file (default: read names from stdin)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Show the forest as a tree
    Tree {
        /// Roster file to label branches with
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        roster: Option<PathBuf>,
    },

    /// Print the raw generator stream
    Draws {
        /// Exclusive upper bound of each draw
        #[arg(short, long, default_value_t = 10)]
        bound: u32,
        /// Number of draws
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
