// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sl-jira: Issue-tracker REST collaborator.
//!
//! Fetches boards, sprints, and sprint issues (enriched with full
//! changelog history for themselves and their subtasks) from an
//! Agile-style tracker API, and converts the wire shapes into the raw
//! records `sl-core` consumes. All timeout and retry policy lives
//! here or above; the engine itself performs no I/O.

pub mod client;
pub mod error;
pub mod models;

pub use client::{JiraClient, JiraConfig};
pub use error::{Error, Result};
pub use models::{Board, Sprint};
