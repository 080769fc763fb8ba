// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sl-jira operations.

use thiserror::Error;

/// All possible errors that can occur while talking to the tracker.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing tracker configuration: {0}\n  hint: set the tracker url, email, and api token")]
    MissingConfig(&'static str),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("tracker api returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sl-jira operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
