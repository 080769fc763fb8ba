// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod analyze;
pub mod boards;
pub mod sprints;

use sl_jira::{JiraClient, JiraConfig};

use crate::config::Config;
use crate::error::Result;

/// Builds an authenticated tracker client from the configuration.
pub fn tracker_client(config: &Config) -> Result<JiraClient> {
    Ok(JiraClient::new(JiraConfig {
        base_url: config.jira.url.clone(),
        email: config.jira.email.clone(),
        api_token: config.jira.api_token.clone(),
    })?)
}
