// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sl-llm operations.

use thiserror::Error;

/// All possible errors that can occur while generating or parsing
/// model output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing model api key\n  hint: set the generator api key in the configuration")]
    MissingApiKey,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model api returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text")]
    EmptyResponse,

    #[error("could not extract json from model reply: {0}")]
    MalformedReply(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for sl-llm operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
