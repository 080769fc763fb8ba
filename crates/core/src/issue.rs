// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for sprint analysis.
//!
//! This module contains the normalized data types the engine operates
//! on: Issue, IssueType, ChangeEvent, and Subtask. Issues are immutable
//! for the duration of an analysis run; derived facts are computed into
//! separate result structures and never written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Changelog field name that records sprint scope membership.
pub const SPRINT_FIELD: &str = "Sprint";
/// Changelog field name that records workflow status transitions.
pub const STATUS_FIELD: &str = "status";
/// Canonical completion status name.
pub const DONE_STATUS: &str = "Done";

/// Classification of issues by their nature.
///
/// Unrecognized type names map to `Other`, which is excluded from the
/// per-type churn buckets but still counts toward overall totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// User-facing piece of work carrying story points.
    Story,
    /// Standard unit of work.
    Task,
    /// Defect or problem to fix.
    Bug,
    /// Any type name the tracker uses that is none of the above.
    Other,
}

impl IssueType {
    /// Maps a tracker-supplied type name onto the known buckets.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "story" => IssueType::Story,
            "task" => IssueType::Task,
            "bug" => IssueType::Bug,
            _ => IssueType::Other,
        }
    }

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Story => "story",
            IssueType::Task => "task",
            IssueType::Bug => "bug",
            IssueType::Other => "other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field change replayed from an issue's history.
///
/// Ordering within an issue follows the source history order; it is not
/// guaranteed to be sorted by timestamp, and the engine keys every
/// decision on the parsed timestamp rather than the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// The issue (or subtask) this change belongs to.
    pub issue_key: String,
    /// The changed field, as named by the tracker.
    pub field: String,
    /// When the change happened; `None` when the source string did not
    /// parse, which excludes the event from window-based reasoning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Previous value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_value: Option<String>,
    /// New value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_value: Option<String>,
}

impl ChangeEvent {
    /// Returns true if this event records a sprint scope change.
    pub fn is_sprint_change(&self) -> bool {
        self.field == SPRINT_FIELD
    }

    /// Returns true if this event records a transition into the
    /// canonical done status.
    pub fn is_completion(&self) -> bool {
        self.field == STATUS_FIELD && self.to_value.as_deref() == Some(DONE_STATUS)
    }
}

/// A subtask with its own replayed change history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    /// Unique tracker key.
    pub key: String,
    /// Short description of the work.
    pub summary: String,
    /// Current workflow status name.
    pub status: String,
    /// Person this subtask is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Replayed change history, keyed by the subtask's own key.
    pub change_events: Vec<ChangeEvent>,
}

/// A normalized issue snapshot with its replayed change history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique tracker key (e.g. `PROJ-123`).
    pub key: String,
    /// Short description of the work.
    pub summary: String,
    /// Classification of the issue.
    pub issue_type: IssueType,
    /// Current workflow status name.
    pub status: String,
    /// Person this issue is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Estimated story points; missing points count as zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_points: Option<f64>,
    /// Creation instant; `None` when the source string did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Replayed change history in source order.
    pub change_events: Vec<ChangeEvent>,
    /// Subtasks with their own change histories.
    pub subtasks: Vec<Subtask>,
}

impl Issue {
    /// Story points with the missing-points-count-as-zero policy applied.
    pub fn points(&self) -> f64 {
        self.story_points.unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
