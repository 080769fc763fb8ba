// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint window construction and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::timestamp::parse_instant;

/// The sprint's time box.
///
/// Both boundaries are required and `start <= end`. Construction is the
/// only fatal point of an analysis run: a window that cannot be built
/// aborts everything, unlike per-event timestamp failures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprintWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SprintWindow {
    /// Builds a window from already-parsed instants.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidWindow { start, end });
        }
        Ok(SprintWindow { start, end })
    }

    /// Builds a window from raw sprint metadata dates.
    pub fn from_raw(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start_raw = start
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingSprintDate { which: "start" })?;
        let end_raw = end
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MissingSprintDate { which: "end" })?;

        let start = parse_instant(start_raw).map_err(|_| Error::InvalidSprintDate {
            which: "start",
            value: start_raw.to_string(),
        })?;
        let end = parse_instant(end_raw).map_err(|_| Error::InvalidSprintDate {
            which: "end",
            value: end_raw.to_string(),
        })?;

        SprintWindow::new(start, end)
    }

    /// Returns true if the instant falls inside the closed window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
