// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::error::Error;
use yare::parameterized;

#[test]
fn from_raw_builds_window() {
    let window = SprintWindow::from_raw(
        Some("2025-05-05T00:00:00.000Z"),
        Some("2025-05-19T00:00:00.000Z"),
    )
    .unwrap();
    assert!(window.start < window.end);
}

#[parameterized(
    missing_start = { None, Some("2025-05-19T00:00:00.000Z"), "start" },
    missing_end = { Some("2025-05-05T00:00:00.000Z"), None, "end" },
    empty_start = { Some(""), Some("2025-05-19T00:00:00.000Z"), "start" },
    blank_end = { Some("2025-05-05T00:00:00.000Z"), Some("   "), "end" },
)]
fn from_raw_requires_both_dates(start: Option<&str>, end: Option<&str>, which: &str) {
    match SprintWindow::from_raw(start, end) {
        Err(Error::MissingSprintDate { which: got }) => assert_eq!(got, which),
        other => panic!("expected MissingSprintDate, got {other:?}"),
    }
}

#[parameterized(
    bad_start = { Some("soon"), Some("2025-05-19T00:00:00.000Z"), "start" },
    bad_end = { Some("2025-05-05T00:00:00.000Z"), Some("later"), "end" },
)]
fn from_raw_rejects_unparsable_dates(start: Option<&str>, end: Option<&str>, which: &str) {
    match SprintWindow::from_raw(start, end) {
        Err(Error::InvalidSprintDate { which: got, .. }) => assert_eq!(got, which),
        other => panic!("expected InvalidSprintDate, got {other:?}"),
    }
}

#[test]
fn start_after_end_is_rejected() {
    let result = SprintWindow::from_raw(
        Some("2025-05-19T00:00:00.000Z"),
        Some("2025-05-05T00:00:00.000Z"),
    );
    assert!(matches!(result, Err(Error::InvalidWindow { .. })));
}

#[test]
fn zero_length_window_is_allowed() {
    let window = SprintWindow::from_raw(
        Some("2025-05-05T00:00:00.000Z"),
        Some("2025-05-05T00:00:00.000Z"),
    )
    .unwrap();
    assert_eq!(window.start, window.end);
}

#[test]
fn contains_is_closed_on_both_ends() {
    let window = SprintWindow::from_raw(
        Some("2025-05-05T00:00:00.000Z"),
        Some("2025-05-19T00:00:00.000Z"),
    )
    .unwrap();
    assert!(window.contains(window.start));
    assert!(window.contains(window.end));
    assert!(window.contains(crate::timestamp::parse_instant("2025-05-10T12:00:00Z").unwrap()));
    assert!(!window.contains(crate::timestamp::parse_instant("2025-05-04T23:59:59Z").unwrap()));
    assert!(!window.contains(crate::timestamp::parse_instant("2025-05-19T00:00:01Z").unwrap()));
}
