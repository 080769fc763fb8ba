// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

const SEARCH_PAGE: &str = r#"{
    "startAt": 0,
    "maxResults": 50,
    "total": 1,
    "issues": [
        {
            "key": "PROJ-1",
            "fields": {
                "summary": "Implement login",
                "status": { "name": "Done" },
                "issuetype": { "name": "Story" },
                "assignee": { "displayName": "Alice" },
                "created": "2025-05-01T09:00:00.000+0530",
                "customfield_10016": 5.0
            },
            "changelog": {
                "histories": [
                    {
                        "created": "2025-05-12T10:00:00.000+0530",
                        "items": [
                            { "field": "status", "fromString": "In Progress", "toString": "Done" },
                            { "field": "assignee", "fromString": null, "toString": "Alice" }
                        ]
                    },
                    {
                        "created": "2025-05-06T10:00:00.000+0530",
                        "items": [
                            { "field": "Sprint", "fromString": null, "toString": "Sprint 42" }
                        ]
                    }
                ]
            }
        }
    ]
}"#;

#[test]
fn search_response_deserializes() {
    let page: SearchResponse = serde_json::from_str(SEARCH_PAGE).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.max_results, 50);
    assert_eq!(page.issues.len(), 1);

    let issue = &page.issues[0];
    assert_eq!(issue.key, "PROJ-1");
    assert_eq!(issue.fields.summary.as_deref(), Some("Implement login"));
    assert_eq!(issue.fields.story_points, Some(5.0));
}

#[test]
fn into_record_flattens_changelog_in_source_order() {
    let page: SearchResponse = serde_json::from_str(SEARCH_PAGE).unwrap();
    let issue = page.issues.into_iter().next().unwrap();
    let record = issue.into_record(Vec::new());

    assert_eq!(record.key, "PROJ-1");
    assert_eq!(record.issue_type, "Story");
    assert_eq!(record.status, "Done");
    assert_eq!(record.assignee.as_deref(), Some("Alice"));
    assert_eq!(record.created, "2025-05-01T09:00:00.000+0530");

    // Two items in the first history, one in the second. Every item is
    // stamped with its history's timestamp and order is preserved even
    // though the histories themselves are not chronologically sorted.
    assert_eq!(record.changelog.len(), 3);
    assert_eq!(record.changelog[0].field, "status");
    assert_eq!(record.changelog[0].date, "2025-05-12T10:00:00.000+0530");
    assert_eq!(record.changelog[1].field, "assignee");
    assert_eq!(record.changelog[1].date, "2025-05-12T10:00:00.000+0530");
    assert_eq!(record.changelog[2].field, "Sprint");
    assert_eq!(record.changelog[2].date, "2025-05-06T10:00:00.000+0530");
}

#[test]
fn into_subtask_record_keeps_key_and_changelog() {
    let page: SearchResponse = serde_json::from_str(SEARCH_PAGE).unwrap();
    let issue = page.issues.into_iter().next().unwrap();
    let subtask = issue.into_subtask_record();

    assert_eq!(subtask.key, "PROJ-1");
    assert_eq!(subtask.status, "Done");
    assert_eq!(subtask.changelog.len(), 3);
}

#[test]
fn missing_optional_fields_become_defaults() {
    let json = r#"{ "key": "PROJ-9", "fields": {} }"#;
    let issue: JiraIssue = serde_json::from_str(json).unwrap();
    let record = issue.into_record(Vec::new());

    assert!(record.summary.is_empty());
    assert!(record.issue_type.is_empty());
    assert!(record.assignee.is_none());
    assert!(record.story_points.is_none());
    assert!(record.created.is_empty());
    assert!(record.changelog.is_empty());
}

#[test]
fn sprint_deserializes_with_nullable_dates() {
    let json = r#"{
        "id": 42,
        "name": "Sprint 42",
        "state": "closed",
        "startDate": "2025-05-05T00:00:00.000Z",
        "endDate": "2025-05-19T00:00:00.000Z",
        "goal": "Ship login"
    }"#;
    let sprint: Sprint = serde_json::from_str(json).unwrap();
    assert_eq!(sprint.id, 42);
    assert_eq!(sprint.start_date.as_deref(), Some("2025-05-05T00:00:00.000Z"));

    let bare: Sprint = serde_json::from_str(r#"{ "id": 7, "name": "Backlog" }"#).unwrap();
    assert!(bare.start_date.is_none());
    assert!(bare.end_date.is_none());
    assert!(bare.goal.is_none());
}

#[test]
fn paged_values_deserializes_boards() {
    let json = r#"{
        "startAt": 0,
        "isLast": true,
        "values": [ { "id": 1, "name": "Team Board", "type": "scrum" } ]
    }"#;
    let page: PagedValues<Board> = serde_json::from_str(json).unwrap();
    assert!(page.is_last);
    assert_eq!(page.values.len(), 1);
    assert_eq!(page.values[0].board_type, "scrum");
}
