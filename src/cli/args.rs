//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build binary search trees from integer sequences and keep a history of them
#[derive(Parser, Debug)]
#[command(name = "bstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree, print its JSON and store it
    Build {
        /// Numbers separated by commas and/or whitespace (stdin if omitted)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
        /// Do not store the result
        #[arg(long)]
        no_save: bool,
        /// Print compact JSON regardless of settings
        #[arg(long)]
        compact: bool,
        /// Also draw the tree on stderr
        #[arg(long)]
        tree: bool,
    },

    /// Show how input is parsed, without building
    Parse {
        /// Numbers separated by commas and/or whitespace (stdin if omitted)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<String>,
    },

    /// List stored trees, most recent first
    History {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
        /// Show at most N records
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one stored tree
    Show {
        /// Record id
        id: u64,
        /// Draw the tree instead of printing JSON
        #[arg(long)]
        tree: bool,
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
    /// Print effective settings
    Show,
    /// Print global config file location
    Path,
}
