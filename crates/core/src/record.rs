// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw tracker records as handed over by collaborators.
//!
//! These carry timestamp strings exactly as emitted by the tracker;
//! [`crate::extract`] normalizes them into engine types. The engine
//! owns no network protocol or file format, so collaborators are free
//! to build these from any source.

use serde::{Deserialize, Serialize};

/// One changelog entry on an issue or subtask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    /// When the change happened, as the raw tracker string.
    pub date: String,
    /// The changed field, as named by the tracker.
    pub field: String,
    /// Previous value.
    #[serde(default, rename = "from")]
    pub from_value: Option<String>,
    /// New value.
    #[serde(default, rename = "to")]
    pub to_value: Option<String>,
}

/// A subtask record with its own changelog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtaskRecord {
    pub key: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub changelog: Vec<ChangeRecord>,
}

/// A raw issue record with nested changelog and subtask records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub key: String,
    #[serde(default)]
    pub summary: String,
    /// Tracker-supplied type name (e.g. "Story", "Task", "Bug").
    #[serde(default, rename = "type")]
    pub issue_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub story_points: Option<f64>,
    /// Creation timestamp, as the raw tracker string.
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub changelog: Vec<ChangeRecord>,
    #[serde(default)]
    pub subtasks: Vec<SubtaskRecord>,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
