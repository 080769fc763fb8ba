// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! REST client for the tracker's Agile API.
//!
//! Authenticates with basic auth (email + API token), paginates the
//! search endpoint, and enriches every sprint issue with the changelog
//! of itself and its subtasks before converting to engine records.

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use sl_core::record::IssueRecord;

use crate::error::{Error, Result};
use crate::models::{Board, JiraIssue, PagedValues, SearchResponse, Sprint};

/// Search page size. The tracker caps pages around this value anyway.
const PAGE_SIZE: u64 = 50;

/// Connection settings for the tracker.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Base URL of the tracker site (e.g. `https://acme.atlassian.net`).
    pub base_url: String,
    /// Account email for basic auth.
    pub email: String,
    /// API token for basic auth.
    pub api_token: String,
}

/// An authenticated tracker client.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    /// Builds a client, validating that every setting is present.
    pub fn new(config: JiraConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::MissingConfig("tracker url"));
        }
        if config.email.trim().is_empty() {
            return Err(Error::MissingConfig("tracker email"));
        }
        if config.api_token.trim().is_empty() {
            return Err(Error::MissingConfig("tracker api token"));
        }

        Ok(JiraClient {
            http: reqwest::Client::new(),
            base_url: normalize_base_url(&config.base_url),
            email: config.email,
            api_token: config.api_token,
        })
    }

    /// Lists all Agile boards visible to the account.
    pub async fn boards(&self) -> Result<Vec<Board>> {
        let page: PagedValues<Board> = self.get_json("/rest/agile/1.0/board", &[]).await?;
        Ok(page.values)
    }

    /// Lists the sprints of a board.
    pub async fn sprints(&self, board_id: u64) -> Result<Vec<Sprint>> {
        let path = format!("/rest/agile/1.0/board/{board_id}/sprint");
        let page: PagedValues<Sprint> = self.get_json(&path, &[]).await?;
        Ok(page.values)
    }

    /// Fetches one sprint's metadata.
    pub async fn sprint(&self, sprint_id: u64) -> Result<Sprint> {
        let path = format!("/rest/agile/1.0/sprint/{sprint_id}");
        self.get_json(&path, &[]).await
    }

    /// Fetches every Story/Task/Bug in the sprint, enriched with the
    /// full changelog of itself and its subtasks.
    pub async fn fetch_sprint_issues(&self, sprint_id: u64) -> Result<Vec<IssueRecord>> {
        let issues = self.search_all(&sprint_issues_jql(sprint_id)).await?;
        info!("fetched {} issues for sprint {}", issues.len(), sprint_id);

        let mut records = Vec::with_capacity(issues.len());
        for issue in issues {
            let subtasks = self
                .search_all(&subtasks_jql(&issue.key))
                .await?
                .into_iter()
                .map(JiraIssue::into_subtask_record)
                .collect();
            records.push(issue.into_record(subtasks));
        }
        Ok(records)
    }

    /// Runs a JQL search to exhaustion, following pagination.
    async fn search_all(&self, jql: &str) -> Result<Vec<JiraIssue>> {
        let mut all = Vec::new();
        let mut start_at = 0u64;
        loop {
            let page: SearchResponse = self
                .get_json(
                    "/rest/api/2/search",
                    &[
                        ("jql", jql.to_string()),
                        ("expand", "changelog".to_string()),
                        ("startAt", start_at.to_string()),
                        ("maxResults", PAGE_SIZE.to_string()),
                    ],
                )
                .await?;

            let fetched = page.issues.len() as u64;
            debug!(
                "search page: startAt={} fetched={} total={}",
                page.start_at, fetched, page.total
            );
            all.extend(page.issues);

            if fetched == 0 {
                break;
            }
            start_at = page.start_at + fetched;
            if start_at >= page.total {
                break;
            }
        }
        Ok(all)
    }

    /// Issues an authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Strips any trailing slash so path joining stays predictable.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// JQL for a sprint's analyzable issues, newest first.
fn sprint_issues_jql(sprint_id: u64) -> String {
    format!("sprint = {sprint_id} AND type in (Story, Task, Bug) ORDER BY created DESC")
}

/// JQL for an issue's subtasks.
fn subtasks_jql(parent_key: &str) -> String {
    format!("parent = {parent_key}")
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
