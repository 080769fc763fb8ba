// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Leveled diagnostics injected into the engine.
//!
//! The engine never logs through a global: callers hand in a [`Logger`]
//! so unit tests can observe diagnostics without capturing stdout.
//! [`TracingLogger`] bridges to the `tracing` facade for production use.

use std::sync::Mutex;

/// Diagnostic sink for the analysis engine.
pub trait Logger: Send + Sync {
    /// Per-issue and per-event detail.
    fn debug(&self, message: &str);
    /// Run-level milestones.
    fn info(&self, message: &str);
    /// Failures that were absorbed but are worth surfacing.
    fn error(&self, message: &str);
}

/// Forwards engine diagnostics to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "sl_core", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "sl_core", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "sl_core", "{message}");
    }
}

/// Discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Severity tag for lines collected by [`MemoryLogger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

/// Collects diagnostics in memory for test assertions.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    /// Creates an empty collector.
    pub fn new() -> Self {
        MemoryLogger::default()
    }

    /// Returns a snapshot of every collected line.
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    /// Returns the messages collected at the given level.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
