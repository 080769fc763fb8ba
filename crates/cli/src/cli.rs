// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Sprint metrics and churn analysis for Agile trackers.
#[derive(Parser, Debug)]
#[command(name = "sprintlens")]
#[command(about = "Sprint metrics and churn analysis for Agile trackers")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (default: ./sprintlens.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the Agile boards visible to the account
    Boards,

    /// List the sprints of a board, most recent first
    Sprints {
        /// Board id
        #[arg(short, long)]
        board: u64,
    },

    /// Analyze one sprint and print the derived metrics
    Analyze {
        /// Sprint id
        #[arg(short, long)]
        sprint: u64,

        /// Capacity sheet exported as text or CSV
        #[arg(short, long)]
        capacity: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `analyze` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text summary
    Text,
    /// Full analysis as pretty-printed JSON
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
