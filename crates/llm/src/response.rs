// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reply hygiene for model output.
//!
//! Models are asked to return bare JSON but routinely wrap it in
//! markdown fences or surrounding prose. Parsing tries the cleaned
//! reply first, then falls back to the outermost brace-delimited body
//! before giving up.

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Strips surrounding markdown code fences from a model reply.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parses a JSON reply, recovering from prose around the body.
pub fn parse_json_reply<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let cleaned = strip_code_fences(raw);
    if let Ok(value) = serde_json::from_str(cleaned) {
        return Ok(value);
    }

    let Some(body) = Regex::new(r"(?s)\{.*\}")
        .ok()
        .and_then(|re| re.find(cleaned).map(|m| m.as_str().to_string()))
    else {
        return Err(Error::MalformedReply(excerpt(raw)));
    };

    serde_json::from_str(&body).map_err(|_| Error::MalformedReply(excerpt(raw)))
}

/// The first part of a reply, for error messages.
fn excerpt(raw: &str) -> String {
    raw.chars().take(200).collect()
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
