//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Convert flat business-process taxonomy spreadsheets into a deduplicated JSON tree
#[derive(Parser, Debug)]
#[command(name = "proctree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the tree from a spreadsheet and write it as JSON
    Build {
        /// Source spreadsheet (.csv, .xlsx, .xlsm, .xlsb)
        #[arg(value_hint = ValueHint::FilePath, default_value = "taxonomy.xlsx")]
        input: PathBuf,
        /// Output tree file
        #[arg(value_hint = ValueHint::FilePath, default_value = "taxonomy_tree.json")]
        output: PathBuf,
    },

    /// Print per-level counts and repeated titles for a tree file
    Stats {
        /// Tree file written by `build`
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Display a tree file as an indented hierarchy
    Tree {
        /// Tree file written by `build`
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
