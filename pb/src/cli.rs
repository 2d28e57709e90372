//! CLI argument parsing for pushboard

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pb")]
#[command(author, version, about = "Concurrent configuration push board", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task to the board
    Add {
        /// Target device address
        #[arg(required = true)]
        target: String,

        /// Configuration lines, or @path to read them from a file
        #[arg(required = true)]
        config: String,

        /// Do not save the device configuration after pushing
        #[arg(long)]
        no_save: bool,
    },

    /// Import target,config rows from a CSV file
    Import {
        /// CSV file with one target,config row per task
        #[arg(required = true)]
        path: PathBuf,
    },

    /// List tasks on the board
    List,

    /// Set the save flag of a task
    SetSave {
        /// Task position on the board
        #[arg(required = true)]
        position: usize,

        /// New save flag value
        #[arg(required = true)]
        save: bool,
    },

    /// Remove a task from the board
    Remove {
        /// Task position on the board
        #[arg(required = true)]
        position: usize,
    },

    /// Remove all tasks from the board
    Clear,

    /// Push configurations and follow progress until every push settles
    Push {
        /// Task positions to push (default: every task not already pushed)
        positions: Vec<usize>,
    },
}
