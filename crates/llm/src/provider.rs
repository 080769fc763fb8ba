// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The text-generation trait and its hosted-model implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// An opaque prompt-in, text-out collaborator.
///
/// Implementations own their transport, timeout, and retry policy.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// A generator backed by the hosted Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiGenerator {
    /// Builds a generator with the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        GeminiGenerator::with_model(api_key, DEFAULT_MODEL)
    }

    /// Builds a generator for a specific model name.
    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(GeminiGenerator {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{API_BASE}/{}:generateContent", self.model);
        debug!("generating {} prompt chars via {}", prompt.len(), self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
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

        let reply: GenerateResponse = serde_json::from_str(&body)?;
        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(Error::EmptyResponse)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
