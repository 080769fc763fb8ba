// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Settings load from `sprintlens.toml` in the working directory (or a
//! path given with `--config`) and individual values can be overridden
//! with `SPRINTLENS_*` environment variables. Missing settings are not
//! an error here; the collaborators validate what they actually need.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sprintlens.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jira: JiraSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
}

/// Tracker connection settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraSettings {
    /// Base URL of the tracker site.
    #[serde(default)]
    pub url: String,
    /// Account email for basic auth.
    #[serde(default)]
    pub email: String,
    /// API token for basic auth.
    #[serde(default)]
    pub api_token: String,
}

/// Text-generator settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// API key; when empty, generator-backed steps are skipped or
    /// rejected depending on whether the command requires them.
    #[serde(default)]
    pub api_key: String,
    /// Model name.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        GeminiSettings {
            api_key: String::new(),
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

impl Config {
    /// Loads configuration from a file (explicit path, or the default
    /// name if present) and applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(explicit) => Config::parse(&fs::read_to_string(explicit)?)?,
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    Config::parse(&fs::read_to_string(default)?)?
                } else {
                    Config::default()
                }
            }
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Applies environment overrides through an injectable lookup.
    pub fn apply_env(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(value) = get("SPRINTLENS_JIRA_URL") {
            self.jira.url = value;
        }
        if let Some(value) = get("SPRINTLENS_JIRA_EMAIL") {
            self.jira.email = value;
        }
        if let Some(value) = get("SPRINTLENS_JIRA_TOKEN") {
            self.jira.api_token = value;
        }
        if let Some(value) = get("SPRINTLENS_GEMINI_API_KEY") {
            self.gemini.api_key = value;
        }
        if let Some(value) = get("SPRINTLENS_GEMINI_MODEL") {
            self.gemini.model = value;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
