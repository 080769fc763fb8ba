// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sl-core operations.

use thiserror::Error;

/// All possible errors that can occur in sl-core operations.
///
/// Only the sprint boundary dates are fatal for an analysis run.
/// Per-event timestamp failures are absorbed by callers with a skip
/// default and never surface through this type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing sprint {which} date\n  hint: both start and end dates are required for analysis")]
    MissingSprintDate { which: &'static str },

    #[error("invalid sprint {which} date: '{value}'")]
    InvalidSprintDate { which: &'static str, value: String },

    #[error("invalid sprint window: start {start} is after end {end}")]
    InvalidWindow {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    #[error("unparsable timestamp: '{0}'")]
    UnparsableTimestamp(String),
}

/// A specialized Result type for sl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
