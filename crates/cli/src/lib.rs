// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sprintlens - Sprint metrics and churn analysis for Agile trackers.
//!
//! This crate wires the collaborators together: the tracker client
//! fetches sprint issues with their change histories, the generator
//! extracts the capacity table and spillover candidates, and the
//! engine in `sl-core` computes the metrics. Output is JSON or a
//! plain-text summary on stdout; diagnostics go to stderr.

mod cli;
mod commands;
mod report;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};

/// Dispatches a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Boards => commands::boards::run(&config).await,
        Command::Sprints { board } => commands::sprints::run(&config, board).await,
        Command::Analyze {
            sprint,
            capacity,
            format,
        } => commands::analyze::run(&config, sprint, capacity.as_deref(), format).await,
    }
}
