// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::provider::TextGenerator;
use async_trait::async_trait;

struct Canned(&'static str);

#[async_trait]
impl TextGenerator for Canned {
    async fn generate(&self, _prompt: &str) -> crate::error::Result<String> {
        Ok(self.0.to_string())
    }
}

#[tokio::test]
async fn parses_candidates_with_reasons() {
    let generator = Canned(
        r#"{ "spilled_stories": [
            { "story_id": "PROJ-2", "reason": "blocked by vendor" },
            { "story_id": "PROJ-5", "reason": "underestimated" }
        ] }"#,
    );
    let candidates = identify_spillover(&generator, "{}").await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].issue_key, "PROJ-2");
    assert_eq!(candidates[0].reason, "blocked by vendor");
}

#[tokio::test]
async fn tolerates_prose_around_the_body() {
    let generator = Canned(
        "Here is the spillover analysis:\n{ \"spilled_stories\": [ { \"story_id\": \"PROJ-2\", \"reason\": \"blocked\" } ] }",
    );
    let candidates = identify_spillover(&generator, "{}").await.unwrap();
    assert_eq!(candidates.len(), 1);
}

#[tokio::test]
async fn missing_reason_defaults_to_empty() {
    let generator = Canned(r#"{ "spilled_stories": [ { "story_id": "PROJ-2" } ] }"#);
    let candidates = identify_spillover(&generator, "{}").await.unwrap();
    assert_eq!(candidates[0].reason, "");
}

#[tokio::test]
async fn no_spillover_is_an_empty_list() {
    let generator = Canned(r#"{ "spilled_stories": [] }"#);
    let candidates = identify_spillover(&generator, "{}").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn unrecoverable_reply_is_an_error() {
    let generator = Canned("No JSON here.");
    let result = identify_spillover(&generator, "{}").await;
    assert!(matches!(result, Err(Error::MalformedReply(_))));
}
