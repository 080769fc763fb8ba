// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp normalization for tracker-supplied date strings.
//!
//! The tracker emits three shapes: a numeric-offset form with no colon
//! (`2025-05-16T15:38:57.738+0530`), a Zulu form (`...Z`), and a bare
//! ISO-8601 form with no offset. All three normalize to a UTC instant,
//! so downstream comparisons never mix naive and aware values.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, Result};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// Parses a tracker timestamp string into a UTC instant.
///
/// Offset and Zulu forms are converted to UTC; bare timestamps are
/// treated as already-UTC. Negative offsets (`-HHMM`) are accepted and
/// handled symmetrically with positive ones. Empty input is an error.
///
/// Callers handling per-event timestamps should degrade with `.ok()`
/// and exclude the event from window-based reasoning; only the two
/// sprint boundary dates may propagate this error.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::UnparsableTimestamp(raw.to_string()));
    }

    if let Some(stripped) = trimmed.strip_suffix('Z') {
        let naive = NaiveDateTime::parse_from_str(stripped, NAIVE_FORMAT)
            .map_err(|_| Error::UnparsableTimestamp(raw.to_string()))?;
        return Ok(naive.and_utc());
    }

    if has_numeric_offset(trimmed) {
        let parsed = DateTime::parse_from_str(trimmed, OFFSET_FORMAT)
            .map_err(|_| Error::UnparsableTimestamp(raw.to_string()))?;
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(trimmed, NAIVE_FORMAT)
        .map_err(|_| Error::UnparsableTimestamp(raw.to_string()))?;
    Ok(naive.and_utc())
}

/// Returns true if the time portion (after the `T` separator) carries a
/// `+HHMM` or `-HHMM` offset. Dashes in the date portion never count.
fn has_numeric_offset(s: &str) -> bool {
    match s.split_once('T') {
        Some((_, time)) => time.contains('+') || time.contains('-'),
        None => false,
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
