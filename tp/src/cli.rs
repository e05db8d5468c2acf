//! CLI argument parsing for the tape planner

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Tape Planner - cut raw tapes into Sort 1 / Sort 2 segments
#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Plan tape cuts into Sort 1 / Sort 2 segments at a 2:1, 5:2 or 3:2 ratio", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a cutting plan for one or more tape lengths
    Plan {
        /// Tape lengths in meters, in cutting order
        #[arg(value_name = "LENGTH", allow_negative_numbers = true)]
        lengths: Vec<String>,

        /// Output format (text, html, json)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Disable colored text output
        #[arg(long)]
        no_color: bool,
    },

    /// Show the sort ranges and allowed ratios
    Ranges,

    /// Enter tapes interactively
    Session,
}
