// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint membership reconstruction by change-history replay.
//!
//! In-scope-at-start policy:
//! 1. An issue with any sprint-field history is in scope iff at least
//!    one sprint-field event happened at or before the window start.
//! 2. Only issues with no sprint-field history at all fall back to the
//!    creation date. Explicit history always wins over creation date,
//!    even when every sprint-field event is after the start.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issue::Issue;
use crate::window::SprintWindow;

/// Derived membership and completion facts for one issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipFact {
    pub issue_key: String,
    pub was_in_scope_at_start: bool,
    pub completed_in_window: bool,
    /// First qualifying completion instant, when completed in window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_instant: Option<DateTime<Utc>>,
}

/// Reconstructs membership facts for a batch of issues, preserving
/// input order so facts stay parallel to their issues.
pub fn reconstruct_all(issues: &[Issue], window: &SprintWindow) -> Vec<MembershipFact> {
    issues
        .iter()
        .map(|issue| reconstruct(issue, window))
        .collect()
}

/// Reconstructs the membership facts for one issue.
///
/// An issue whose timestamps are all unparsable yields
/// `was_in_scope_at_start = false, completed_in_window = false` rather
/// than an error.
pub fn reconstruct(issue: &Issue, window: &SprintWindow) -> MembershipFact {
    let (completed_in_window, completion_instant) = completion_in_window(issue, window);
    MembershipFact {
        issue_key: issue.key.clone(),
        was_in_scope_at_start: in_scope_at_start(issue, window),
        completed_in_window,
        completion_instant,
    }
}

/// The two-step scope decision shared with spillover verification.
pub fn in_scope_at_start(issue: &Issue, window: &SprintWindow) -> bool {
    let mut has_sprint_history = false;
    for event in issue.change_events.iter().filter(|e| e.is_sprint_change()) {
        has_sprint_history = true;
        if let Some(instant) = event.timestamp {
            if instant <= window.start {
                return true;
            }
        }
    }
    if has_sprint_history {
        // Explicit history present but nothing at or before the start.
        return false;
    }
    match issue.created {
        Some(created) => created <= window.start,
        None => false,
    }
}

/// Returns completion status and the first qualifying completion
/// instant.
///
/// Events are not assumed sorted: the earliest qualifying timestamp is
/// authoritative regardless of history position, and the boolean holds
/// as soon as any qualifying event exists.
fn completion_in_window(
    issue: &Issue,
    window: &SprintWindow,
) -> (bool, Option<DateTime<Utc>>) {
    let mut first: Option<DateTime<Utc>> = None;
    for event in issue.change_events.iter().filter(|e| e.is_completion()) {
        if let Some(instant) = event.timestamp {
            if window.contains(instant) && first.map_or(true, |current| instant < current) {
                first = Some(instant);
            }
        }
    }
    (first.is_some(), first)
}

#[cfg(test)]
#[path = "membership_tests.rs"]
mod tests;
