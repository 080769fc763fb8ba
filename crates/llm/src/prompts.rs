// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt assembly for the extraction tasks.
//!
//! Prompts pin the reply to a JSON shape so the parsers in
//! [`crate::capacity`] and [`crate::spillover`] stay simple. The model
//! still gets it wrong sometimes; [`crate::response`] absorbs that.

/// Prompt for extracting the capacity table from a spreadsheet's
/// textual dump.
pub fn capacity_prompt(sheet_text: &str) -> String {
    format!(
        "Analyze the following sprint capacity sheet and extract every team \
member's capacity for the sprint in story points.\n\
\n\
Sheet data:\n\
{sheet_text}\n\
\n\
Return the data in this JSON format:\n\
{{\n\
    \"team_members\": [\n\
        {{ \"name\": string, \"capacity\": number }}\n\
    ]\n\
}}\n\
\n\
Important: Return ONLY the JSON object, with no additional text or explanation."
    )
}

/// Prompt for identifying spillover candidates from serialized sprint
/// data (issues with their change histories and the window dates).
pub fn spillover_prompt(sprint_data: &str) -> String {
    format!(
        "Analyze the following sprint data and identify the stories that \
spilled over: stories that were in the sprint's scope when it started but \
were not completed by its end. Include stories whose sprint field moved to a \
future sprint, or which were removed from the sprint, during the sprint. For \
each spilled story state the root cause you can infer from its change \
history.\n\
\n\
Sprint data:\n\
{sprint_data}\n\
\n\
Return the analysis in this JSON format:\n\
{{\n\
    \"spilled_stories\": [\n\
        {{ \"story_id\": string, \"reason\": string }}\n\
    ]\n\
}}\n\
\n\
Important: Return ONLY the JSON object, with no additional text or explanation."
    )
}

#[cfg(test)]
#[path = "prompts_tests.rs"]
mod tests;
