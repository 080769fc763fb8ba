// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end CLI specs.
//!
//! The test files under `cli/` are wired into the `sprintlens` crate
//! via `[[test]]` entries so they build against the real binary. This
//! package exists so the workspace can host them in one place.
