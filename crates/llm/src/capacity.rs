// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capacity table extraction.
//!
//! The spreadsheet itself is not parsed here beyond the caller turning
//! it into text; the model pulls the member/capacity pairs out of that
//! dump and this module types the reply.

use serde::Deserialize;
use tracing::info;

use sl_core::metrics::CapacityEntry;

use crate::error::Result;
use crate::prompts::capacity_prompt;
use crate::provider::TextGenerator;
use crate::response::parse_json_reply;

#[derive(Debug, Deserialize)]
struct CapacityReply {
    #[serde(default)]
    team_members: Vec<MemberEntry>,
}

#[derive(Debug, Deserialize)]
struct MemberEntry {
    name: String,
    /// Missing capacity figures become zero, which downstream reports
    /// as a flagged no-capacity state rather than dropping the member.
    #[serde(default)]
    capacity: Option<f64>,
}

/// Extracts the capacity table from a spreadsheet's textual dump.
pub async fn extract_capacity_table(
    generator: &dyn TextGenerator,
    sheet_text: &str,
) -> Result<Vec<CapacityEntry>> {
    let reply = generator.generate(&capacity_prompt(sheet_text)).await?;
    let parsed: CapacityReply = parse_json_reply(&reply)?;

    let entries: Vec<CapacityEntry> = parsed
        .team_members
        .into_iter()
        .map(|member| CapacityEntry {
            member: member.name,
            capacity_points: member.capacity.unwrap_or(0.0),
        })
        .collect();

    info!("extracted capacity for {} members", entries.len());
    Ok(entries)
}

#[cfg(test)]
#[path = "capacity_tests.rs"]
mod tests;
