// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Change event extraction.
//!
//! Flattens raw issue records into normalized [`Issue`]s with a uniform
//! ordered sequence of [`ChangeEvent`]s. Source history order is
//! preserved; timestamps that do not parse become `None` so later
//! stages can exclude them from window-based reasoning instead of
//! aborting the run.

use crate::issue::{ChangeEvent, Issue, IssueType, Subtask};
use crate::logger::Logger;
use crate::record::{ChangeRecord, IssueRecord, SubtaskRecord};
use crate::timestamp::parse_instant;

/// Normalizes a batch of raw records, preserving input order.
pub fn extract_all(records: &[IssueRecord], logger: &dyn Logger) -> Vec<Issue> {
    records
        .iter()
        .map(|record| extract_issue(record, logger))
        .collect()
}

/// Normalizes one raw record into an [`Issue`].
pub fn extract_issue(record: &IssueRecord, logger: &dyn Logger) -> Issue {
    let created = match parse_instant(&record.created) {
        Ok(instant) => Some(instant),
        Err(_) => {
            logger.debug(&format!(
                "{}: unparsable created date '{}'",
                record.key, record.created
            ));
            None
        }
    };

    Issue {
        key: record.key.clone(),
        summary: record.summary.clone(),
        issue_type: IssueType::from_name(&record.issue_type),
        status: record.status.clone(),
        assignee: record.assignee.clone(),
        story_points: record.story_points,
        created,
        change_events: extract_events(&record.key, &record.changelog, logger),
        subtasks: record
            .subtasks
            .iter()
            .map(|subtask| extract_subtask(subtask, logger))
            .collect(),
    }
}

fn extract_subtask(record: &SubtaskRecord, logger: &dyn Logger) -> Subtask {
    Subtask {
        key: record.key.clone(),
        summary: record.summary.clone(),
        status: record.status.clone(),
        assignee: record.assignee.clone(),
        change_events: extract_events(&record.key, &record.changelog, logger),
    }
}

/// Converts changelog entries into events keyed by the owning issue.
fn extract_events(key: &str, changelog: &[ChangeRecord], logger: &dyn Logger) -> Vec<ChangeEvent> {
    changelog
        .iter()
        .map(|change| {
            let timestamp = match parse_instant(&change.date) {
                Ok(instant) => Some(instant),
                Err(_) => {
                    logger.debug(&format!(
                        "{}: unparsable changelog date '{}' on field '{}'",
                        key, change.date, change.field
                    ));
                    None
                }
            };
            ChangeEvent {
                issue_key: key.to_string(),
                field: change.field.clone(),
                timestamp,
                from_value: change.from_value.clone(),
                to_value: change.to_value.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
