// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sprintlens analyze` - run the full sprint analysis.
//!
//! Fetches the sprint and its issues, extracts the capacity table from
//! the supplied sheet, asks the generator for spillover candidates,
//! and hands everything to the engine. The sprint window is the only
//! fatal gate; everything after it degrades per event or per field.

use std::fs;
use std::path::Path;
use tracing::warn;

use sl_core::window::SprintWindow;
use sl_core::TracingLogger;
use sl_llm::{extract_capacity_table, identify_spillover, GeminiGenerator};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::report;

use super::tracker_client;

pub async fn run(
    config: &Config,
    sprint_id: u64,
    capacity_path: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let client = tracker_client(config)?;

    let sprint = client.sprint(sprint_id).await?;
    let window = SprintWindow::from_raw(sprint.start_date.as_deref(), sprint.end_date.as_deref())?;
    let records = client.fetch_sprint_issues(sprint_id).await?;

    let capacity = match capacity_path {
        Some(path) => {
            let sheet = fs::read_to_string(path)?;
            let generator = GeminiGenerator::with_model(
                config.gemini.api_key.as_str(),
                config.gemini.model.as_str(),
            )?;
            extract_capacity_table(&generator, &sheet).await?
        }
        None => Vec::new(),
    };

    let candidates = if config.gemini.api_key.trim().is_empty() {
        warn!("no generator api key configured; skipping spillover identification");
        Vec::new()
    } else {
        let generator = GeminiGenerator::with_model(
            config.gemini.api_key.as_str(),
            config.gemini.model.as_str(),
        )?;
        let sprint_data = serde_json::to_string(&serde_json::json!({
            "sprint_name": sprint.name,
            "start_date": sprint.start_date,
            "end_date": sprint.end_date,
            "issues": records,
        }))?;
        identify_spillover(&generator, &sprint_data).await?
    };

    let analysis = sl_core::analyze(&records, window, &capacity, &candidates, &TracingLogger);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print!("{}", report::render(&analysis)),
    }
    Ok(())
}
