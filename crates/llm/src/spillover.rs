// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spillover candidate identification.
//!
//! The model names candidate issues and their reasons; verification
//! and point accounting happen in `sl-core`, which re-checks every
//! candidate against the replayed change history.

use serde::Deserialize;
use tracing::info;

use sl_core::churn::SpilloverCandidate;

use crate::error::Result;
use crate::prompts::spillover_prompt;
use crate::provider::TextGenerator;
use crate::response::parse_json_reply;

#[derive(Debug, Deserialize)]
struct SpilloverReply {
    #[serde(default)]
    spilled_stories: Vec<SpilledStory>,
}

#[derive(Debug, Deserialize)]
struct SpilledStory {
    story_id: String,
    #[serde(default)]
    reason: String,
}

/// Asks the model for spillover candidates over serialized sprint data.
pub async fn identify_spillover(
    generator: &dyn TextGenerator,
    sprint_data: &str,
) -> Result<Vec<SpilloverCandidate>> {
    let reply = generator.generate(&spillover_prompt(sprint_data)).await?;
    let parsed: SpilloverReply = parse_json_reply(&reply)?;

    let candidates: Vec<SpilloverCandidate> = parsed
        .spilled_stories
        .into_iter()
        .map(|story| SpilloverCandidate {
            issue_key: story.story_id,
            reason: story.reason,
        })
        .collect();

    info!("model identified {} spillover candidates", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
#[path = "spillover_tests.rs"]
mod tests;
