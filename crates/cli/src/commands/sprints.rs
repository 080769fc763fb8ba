// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sprintlens sprints` - list a board's sprints, most recent first.

use sl_jira::Sprint;

use crate::config::Config;
use crate::error::Result;

use super::tracker_client;

pub async fn run(config: &Config, board_id: u64) -> Result<()> {
    let client = tracker_client(config)?;
    let mut sprints = client.sprints(board_id).await?;
    most_recent_first(&mut sprints);

    if sprints.is_empty() {
        println!("board {board_id} has no sprints");
        return Ok(());
    }

    for sprint in sprints {
        println!(
            "{}\t{}\t{}\t{} .. {}",
            sprint.id,
            sprint.name,
            sprint.state.as_deref().unwrap_or("-"),
            sprint.start_date.as_deref().unwrap_or("-"),
            sprint.end_date.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

/// Sorts by end date descending; sprints without an end date go last.
/// ISO-8601 strings compare correctly as text.
fn most_recent_first(sprints: &mut [Sprint]) {
    sprints.sort_by(|a, b| b.end_date.cmp(&a.end_date));
}

#[cfg(test)]
#[path = "sprints_tests.rs"]
mod tests;
