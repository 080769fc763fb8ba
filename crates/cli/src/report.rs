// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of an analysis.

use sl_core::metrics::UtilizationFlag;
use sl_core::SprintAnalysis;

/// Renders the analysis as a human-readable summary.
pub fn render(analysis: &SprintAnalysis) -> String {
    let summary = &analysis.summary;
    let mut out = String::new();

    out.push_str(&format!(
        "sprint window: {} .. {}\n",
        analysis.window.start.format("%Y-%m-%d"),
        analysis.window.end.format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "committed: {:.1} pts    completed: {:.1} pts\n",
        summary.total_committed_points, summary.total_completed_points
    ));
    out.push_str(&format!(
        "churn: {} events, {:.1} pts (story {}/{:.1}, task {}/{:.1}, bug {}/{:.1})\n",
        summary.churn.total_count,
        summary.churn.total_points,
        summary.churn.story_count,
        summary.churn.story_points,
        summary.churn.task_count,
        summary.churn.task_points,
        summary.churn.bug_count,
        summary.churn.bug_points,
    ));
    out.push_str(&format!(
        "spillover: {} issues, {:.1} pts\n",
        summary.spillover_count, summary.spillover_points
    ));

    for record in &analysis.spillover {
        let marker = if record.in_scope_at_start { "" } else { " (not in scope at start)" };
        out.push_str(&format!(
            "  {} {:.1} pts: {}{}\n",
            record.issue_key, record.story_points, record.reason, marker
        ));
    }

    if !summary.members.is_empty() {
        out.push_str("members:\n");
        for member in &summary.members {
            let capacity = member
                .capacity
                .map_or("-".to_string(), |c| format!("{c:.1}"));
            let utilization = member
                .utilization_percent
                .map_or("-".to_string(), |u| format!("{u:.0}%"));
            out.push_str(&format!(
                "  {}\tcapacity {}\tcommitted {:.1}\tcompleted {:.1}\tutilization {}\t{}\n",
                member.member,
                capacity,
                member.committed,
                member.completed,
                utilization,
                flag_label(member.flag),
            ));
        }
    }

    if summary.unassigned.committed > 0.0 || summary.unassigned.completed > 0.0 {
        out.push_str(&format!(
            "unassigned:\tcommitted {:.1}\tcompleted {:.1}\n",
            summary.unassigned.committed, summary.unassigned.completed
        ));
    }

    out
}

fn flag_label(flag: UtilizationFlag) -> &'static str {
    match flag {
        UtilizationFlag::Over => "over-utilized",
        UtilizationFlag::Under => "under-utilized",
        UtilizationFlag::AtCapacity => "at capacity",
        UtilizationFlag::NoCapacityData => "no capacity data",
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
