// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end sprint analysis orchestration.
//!
//! Data flows one way: raw records, normalized issues, membership
//! facts, churn/spillover classification, aggregated metrics. Every
//! derived structure is rebuilt per invocation; nothing persists
//! between runs.

use serde::{Deserialize, Serialize};

use crate::churn::{classify_churn, classify_spillover, ChurnRecord, SpilloverCandidate, SpilloverRecord};
use crate::extract::extract_all;
use crate::issue::Issue;
use crate::logger::Logger;
use crate::membership::{reconstruct_all, MembershipFact};
use crate::metrics::{aggregate, CapacityEntry, MetricsSummary};
use crate::record::IssueRecord;
use crate::window::SprintWindow;

/// Everything derived from one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintAnalysis {
    pub window: SprintWindow,
    pub issues: Vec<Issue>,
    pub facts: Vec<MembershipFact>,
    pub churn: Vec<ChurnRecord>,
    pub spillover: Vec<SpilloverRecord>,
    pub summary: MetricsSummary,
}

/// Runs the full pipeline over an in-memory snapshot of raw records.
///
/// The window must already be validated ([`SprintWindow::from_raw`] is
/// the fatal gate); from here on every per-event or per-field failure
/// degrades locally and the run always produces a summary.
pub fn analyze(
    records: &[IssueRecord],
    window: SprintWindow,
    capacity: &[CapacityEntry],
    spillover_candidates: &[SpilloverCandidate],
    logger: &dyn Logger,
) -> SprintAnalysis {
    logger.info(&format!(
        "analyzing {} issues in window {} .. {}",
        records.len(),
        window.start,
        window.end
    ));

    let issues = extract_all(records, logger);
    let facts = reconstruct_all(&issues, &window);
    let churn = classify_churn(&issues, &window);
    let spillover = classify_spillover(spillover_candidates, &issues, &window);
    let summary = aggregate(&issues, &facts, &churn, &spillover, capacity);

    logger.info(&format!(
        "committed {:.1} completed {:.1} churn {} spillover {}",
        summary.total_committed_points,
        summary.total_completed_points,
        summary.churn.total_count,
        summary.spillover_count
    ));

    SprintAnalysis {
        window,
        issues,
        facts,
        churn,
        spillover,
        summary,
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
