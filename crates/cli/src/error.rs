// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for the command-line driver.

use thiserror::Error;

/// Everything that can fail while running a command.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] sl_core::Error),

    #[error("{0}")]
    Jira(#[from] sl_jira::Error),

    #[error("{0}")]
    Llm(#[from] sl_llm::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for the command-line driver.
pub type Result<T> = std::result::Result<T, Error>;
