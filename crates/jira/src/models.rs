// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire models for the tracker's Agile REST API.
//!
//! These mirror the JSON the tracker returns (camelCase names, nested
//! `fields` objects) and convert into the flat raw records `sl-core`
//! consumes. Conversion preserves changelog source order: histories in
//! response order, items in history order.

use serde::{Deserialize, Serialize};

use sl_core::record::{ChangeRecord, IssueRecord, SubtaskRecord};

/// An Agile board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub board_type: String,
}

/// A sprint with its metadata. The boundary dates stay raw strings
/// here; `sl-core` owns their (fatal) validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
}

/// A page of values from the Agile API (boards, sprints).
#[derive(Debug, Deserialize)]
pub struct PagedValues<T> {
    #[serde(rename = "startAt", default)]
    pub start_at: u64,
    #[serde(rename = "isLast", default)]
    pub is_last: bool,
    pub values: Vec<T>,
}

/// A page of issues from the search API.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "startAt")]
    pub start_at: u64,
    #[serde(rename = "maxResults")]
    pub max_results: u64,
    pub total: u64,
    pub issues: Vec<JiraIssue>,
}

/// An issue as returned by the search API with changelog expansion.
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
    #[serde(default)]
    pub changelog: Option<Changelog>,
}

/// The subset of issue fields the analysis needs.
#[derive(Debug, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<NamedField>,
    #[serde(rename = "issuetype", default)]
    pub issue_type: Option<NamedField>,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
    #[serde(default)]
    pub created: Option<String>,
    /// Story point estimate. Adjust the field id to the site's setup.
    #[serde(rename = "customfield_10016", default)]
    pub story_points: Option<f64>,
}

/// A field whose only interesting part is its display name.
#[derive(Debug, Deserialize)]
pub struct NamedField {
    pub name: String,
}

/// A user reference.
#[derive(Debug, Deserialize)]
pub struct JiraUser {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// An issue's expanded change history.
#[derive(Debug, Default, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub histories: Vec<History>,
}

/// One changelog entry: a timestamp plus the field changes made then.
#[derive(Debug, Deserialize)]
pub struct History {
    pub created: String,
    #[serde(default)]
    pub items: Vec<HistoryItem>,
}

/// A single field change within a history entry.
#[derive(Debug, Deserialize)]
pub struct HistoryItem {
    pub field: String,
    #[serde(rename = "fromString", default)]
    pub from_value: Option<String>,
    #[serde(rename = "toString", default)]
    pub to_value: Option<String>,
}

impl JiraIssue {
    /// Converts this issue and its already-fetched subtasks into the
    /// raw record shape the engine consumes.
    pub fn into_record(self, subtasks: Vec<SubtaskRecord>) -> IssueRecord {
        IssueRecord {
            key: self.key,
            summary: self.fields.summary.unwrap_or_default(),
            issue_type: self.fields.issue_type.map(|t| t.name).unwrap_or_default(),
            status: self.fields.status.map(|s| s.name).unwrap_or_default(),
            assignee: self.fields.assignee.map(|a| a.display_name),
            story_points: self.fields.story_points,
            created: self.fields.created.unwrap_or_default(),
            changelog: changelog_records(self.changelog),
            subtasks,
        }
    }

    /// Converts a `parent = KEY` search hit into a subtask record.
    pub fn into_subtask_record(self) -> SubtaskRecord {
        SubtaskRecord {
            key: self.key,
            summary: self.fields.summary.unwrap_or_default(),
            status: self.fields.status.map(|s| s.name).unwrap_or_default(),
            assignee: self.fields.assignee.map(|a| a.display_name),
            changelog: changelog_records(self.changelog),
        }
    }
}

/// Flattens histories into one change record per item, stamping every
/// item with its history's timestamp.
fn changelog_records(changelog: Option<Changelog>) -> Vec<ChangeRecord> {
    let Some(changelog) = changelog else {
        return Vec::new();
    };

    let mut records = Vec::new();
    for history in changelog.histories {
        for item in history.items {
            records.push(ChangeRecord {
                date: history.created.clone(),
                field: item.field,
                from_value: item.from_value,
                to_value: item.to_value,
            });
        }
    }
    records
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
