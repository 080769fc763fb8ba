// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Utilization and sprint-wide metric aggregation.
//!
//! The fold over per-issue facts is the only place shared accumulators
//! exist, and it runs as a plain single-threaded reduction. Everything
//! upstream is computed per issue and can be parallelized freely.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::churn::{churn_breakdown, spillover_points, ChurnBreakdown, ChurnRecord, SpilloverRecord};
use crate::issue::Issue;
use crate::membership::MembershipFact;

/// A team member's declared point capacity for the sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityEntry {
    pub member: String,
    pub capacity_points: f64,
}

/// Over/under-utilization classification for one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationFlag {
    /// Completed more points than declared capacity.
    Over,
    /// Completed fewer points than declared capacity.
    Under,
    /// Completed exactly the declared capacity; neither flag applies.
    AtCapacity,
    /// No usable capacity figure; utilization cannot be computed.
    NoCapacityData,
}

/// Per-member committed/completed totals merged with capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberMetrics {
    pub member: String,
    /// Declared capacity; `None` when absent from the capacity table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    /// Points of this member's issues in scope at sprint start.
    pub committed: f64,
    /// Points of this member's issues completed within the window.
    pub completed: f64,
    /// `completed / capacity * 100`, only when capacity is known and
    /// nonzero. Never computed with a zero divisor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utilization_percent: Option<f64>,
    pub flag: UtilizationFlag,
}

/// Committed/completed totals for issues with no assignee.
///
/// Tracked separately but still counted into sprint-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnassignedMetrics {
    pub committed: f64,
    pub completed: f64,
}

/// The final aggregated view of one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_committed_points: f64,
    pub total_completed_points: f64,
    pub churn: ChurnBreakdown,
    pub spillover_count: usize,
    pub spillover_points: f64,
    pub members: Vec<MemberMetrics>,
    pub unassigned: UnassignedMetrics,
}

#[derive(Default)]
struct Tally {
    committed: f64,
    completed: f64,
}

/// Folds per-issue facts into the sprint-wide summary.
///
/// `issues` and `facts` must be parallel slices from the same run.
/// Committed and completed are independent partitions per issue: an
/// issue can be either, both, or neither. The fold is pure over its
/// inputs, so repeated invocations yield identical summaries.
pub fn aggregate(
    issues: &[Issue],
    facts: &[MembershipFact],
    churn: &[ChurnRecord],
    spillover: &[SpilloverRecord],
    capacity: &[CapacityEntry],
) -> MetricsSummary {
    // BTreeMap keeps member rows in a stable order across runs.
    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    let mut unassigned = UnassignedMetrics::default();

    for (issue, fact) in issues.iter().zip(facts) {
        let points = issue.points();
        match issue.assignee.as_deref() {
            Some(member) => {
                let tally = tallies.entry(member.to_string()).or_default();
                if fact.was_in_scope_at_start {
                    tally.committed += points;
                }
                if fact.completed_in_window {
                    tally.completed += points;
                }
            }
            None => {
                if fact.was_in_scope_at_start {
                    unassigned.committed += points;
                }
                if fact.completed_in_window {
                    unassigned.completed += points;
                }
            }
        }
    }

    let declared: HashMap<&str, f64> = capacity
        .iter()
        .map(|entry| (entry.member.as_str(), entry.capacity_points))
        .collect();

    let members: Vec<MemberMetrics> = tallies
        .into_iter()
        .map(|(member, tally)| {
            let capacity = declared.get(member.as_str()).copied();
            member_metrics(member, capacity, tally.committed, tally.completed)
        })
        .collect();

    let total_committed_points =
        members.iter().map(|m| m.committed).sum::<f64>() + unassigned.committed;
    let total_completed_points =
        members.iter().map(|m| m.completed).sum::<f64>() + unassigned.completed;

    MetricsSummary {
        total_committed_points,
        total_completed_points,
        churn: churn_breakdown(churn),
        spillover_count: spillover.len(),
        spillover_points: spillover_points(spillover),
        members,
        unassigned,
    }
}

/// Builds one member row from tallies and an optional declared
/// capacity. A missing or zero capacity yields the no-capacity state
/// instead of a zero divisor.
fn member_metrics(
    member: String,
    capacity: Option<f64>,
    committed: f64,
    completed: f64,
) -> MemberMetrics {
    match capacity {
        Some(points) if points > 0.0 => {
            let flag = if completed > points {
                UtilizationFlag::Over
            } else if completed < points {
                UtilizationFlag::Under
            } else {
                UtilizationFlag::AtCapacity
            };
            MemberMetrics {
                member,
                capacity: Some(points),
                committed,
                completed,
                utilization_percent: Some(completed / points * 100.0),
                flag,
            }
        }
        _ => MemberMetrics {
            member,
            capacity,
            committed,
            completed,
            utilization_percent: None,
            flag: UtilizationFlag::NoCapacityData,
        },
    }
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
