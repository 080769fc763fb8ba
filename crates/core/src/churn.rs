// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Churn and spillover classification.
//!
//! Churn counts one record per qualifying sprint-field event, not one
//! per issue: an issue pulled in and out of scope repeatedly
//! contributes each time, because churn is an event count. Spillover
//! candidates arrive from upstream with a free-text reason; the
//! classifier only verifies scope and totals points.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::issue::{Issue, IssueType};
use crate::membership::in_scope_at_start;
use crate::window::SprintWindow;

/// One sprint-scope addition observed after the sprint began.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnRecord {
    pub issue_key: String,
    /// When the issue entered the sprint's scope.
    pub added_instant: DateTime<Utc>,
    /// Carried story points; missing points count as zero.
    pub story_points: f64,
    pub issue_type: IssueType,
}

/// Churn totals, overall and per named type bucket.
///
/// `Other` types count toward the overall totals only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChurnBreakdown {
    pub total_count: usize,
    pub total_points: f64,
    pub story_count: usize,
    pub story_points: f64,
    pub task_count: usize,
    pub task_points: f64,
    pub bug_count: usize,
    pub bug_points: f64,
}

/// Classifies churn events across all issues.
///
/// A sprint-field event strictly after the window start and at or
/// before the window end produces one record. An event at exactly the
/// start belongs to committed scope, not churn.
pub fn classify_churn(issues: &[Issue], window: &SprintWindow) -> Vec<ChurnRecord> {
    let mut records = Vec::new();
    for issue in issues {
        for event in issue.change_events.iter().filter(|e| e.is_sprint_change()) {
            if let Some(instant) = event.timestamp {
                if window.start < instant && instant <= window.end {
                    records.push(ChurnRecord {
                        issue_key: issue.key.clone(),
                        added_instant: instant,
                        story_points: issue.points(),
                        issue_type: issue.issue_type,
                    });
                }
            }
        }
    }
    records
}

/// Aggregates churn records into per-type totals.
pub fn churn_breakdown(records: &[ChurnRecord]) -> ChurnBreakdown {
    let mut breakdown = ChurnBreakdown::default();
    for record in records {
        breakdown.total_count += 1;
        breakdown.total_points += record.story_points;
        match record.issue_type {
            IssueType::Story => {
                breakdown.story_count += 1;
                breakdown.story_points += record.story_points;
            }
            IssueType::Task => {
                breakdown.task_count += 1;
                breakdown.task_points += record.story_points;
            }
            IssueType::Bug => {
                breakdown.bug_count += 1;
                breakdown.bug_points += record.story_points;
            }
            IssueType::Other => {}
        }
    }
    breakdown
}

/// A spillover candidate identified upstream, with its stated reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpilloverCandidate {
    pub issue_key: String,
    pub reason: String,
}

/// A verified spillover entry.
///
/// Candidates that fail the in-scope check (or name unknown issues)
/// stay listed with zero points and a cleared flag, so the listing is
/// never silently shortened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpilloverRecord {
    pub issue_key: String,
    pub reason: String,
    /// Countable points: the issue's points when verified, else zero.
    pub story_points: f64,
    pub in_scope_at_start: bool,
}

/// Verifies spillover candidates against the issues' change history.
///
/// The scope check is the same two-step policy used for membership
/// reconstruction: explicit sprint-field history before the window
/// start, else the creation-date fallback.
pub fn classify_spillover(
    candidates: &[SpilloverCandidate],
    issues: &[Issue],
    window: &SprintWindow,
) -> Vec<SpilloverRecord> {
    let by_key: HashMap<&str, &Issue> = issues.iter().map(|i| (i.key.as_str(), i)).collect();

    candidates
        .iter()
        .map(|candidate| match by_key.get(candidate.issue_key.as_str()) {
            Some(issue) if in_scope_at_start(issue, window) => SpilloverRecord {
                issue_key: candidate.issue_key.clone(),
                reason: candidate.reason.clone(),
                story_points: issue.points(),
                in_scope_at_start: true,
            },
            _ => SpilloverRecord {
                issue_key: candidate.issue_key.clone(),
                reason: candidate.reason.clone(),
                story_points: 0.0,
                in_scope_at_start: false,
            },
        })
        .collect()
}

/// Total points across spillover entries. Unverified entries carry
/// zero points, so a plain sum honors the exclusion.
pub fn spillover_points(records: &[SpilloverRecord]) -> f64 {
    records.iter().map(|record| record.story_points).sum()
}

#[cfg(test)]
#[path = "churn_tests.rs"]
mod tests;
