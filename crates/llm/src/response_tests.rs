// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use serde::Deserialize;
use yare::parameterized;

#[derive(Debug, PartialEq, Deserialize)]
struct Reply {
    answer: String,
}

#[parameterized(
    bare = { "{\"answer\":\"ok\"}" },
    fenced = { "```\n{\"answer\":\"ok\"}\n```" },
    json_fenced = { "```json\n{\"answer\":\"ok\"}\n```" },
    padded = { "  \n```json\n{\"answer\":\"ok\"}\n```\n  " },
)]
fn strip_code_fences_restores_bare_json(raw: &str) {
    assert_eq!(strip_code_fences(raw), "{\"answer\":\"ok\"}");
}

#[test]
fn strip_code_fences_leaves_inner_backticks_alone() {
    let raw = "{\"answer\":\"use ``` for code\"}";
    assert_eq!(strip_code_fences(raw), raw);
}

#[parameterized(
    bare = { "{\"answer\":\"ok\"}" },
    fenced = { "```json\n{\"answer\":\"ok\"}\n```" },
    prose_before = { "Here is the result you asked for:\n{\"answer\":\"ok\"}" },
    prose_around = { "Sure!\n{\"answer\":\"ok\"}\nLet me know if you need more." },
)]
fn parse_json_reply_recovers_the_body(raw: &str) {
    let reply: Reply = parse_json_reply(raw).unwrap();
    assert_eq!(reply.answer, "ok");
}

#[parameterized(
    no_json = { "I cannot answer that." },
    empty = { "" },
    broken_body = { "{\"answer\": }" },
)]
fn parse_json_reply_rejects_unrecoverable_replies(raw: &str) {
    let result: Result<Reply> = parse_json_reply(raw);
    assert!(matches!(result, Err(Error::MalformedReply(_))));
}

#[test]
fn malformed_error_excerpt_is_bounded() {
    let long = "x".repeat(1000);
    match parse_json_reply::<Reply>(&long) {
        Err(Error::MalformedReply(excerpt)) => assert!(excerpt.len() <= 200),
        other => panic!("expected MalformedReply, got {other:?}"),
    }
}
