//! Aggregated text bundle handed to the analyzer

use chrono::NaiveDateTime;

use crate::consts::{SEPARATOR_WIDTH, TIMESTAMP_FORMAT};
use crate::core::ParsedLog;

pub(crate) const BUNDLE_TITLE: &str = "Work Log Digest";

pub(crate) fn heavy_separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

pub(crate) fn light_separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Concatenate logs, in the given order, into one delimited text bundle.
pub(crate) fn format_bundle(
    logs: &[ParsedLog],
    window_description: &str,
    generated_at: NaiveDateTime,
) -> String {
    let heavy = heavy_separator();
    let light = light_separator();

    let mut lines: Vec<String> = vec![
        heavy.clone(),
        BUNDLE_TITLE.to_string(),
        heavy.clone(),
        format!("Generated at: {}", generated_at.format(TIMESTAMP_FORMAT)),
        format!("Range: {window_description}"),
        format!("Log count: {}", logs.len()),
        String::new(),
    ];

    for log in logs {
        lines.push(heavy.clone());
        lines.push(format!("Date: {}", log.date));
        lines.push(format!("File: {}", log.file_path));
        lines.push(heavy.clone());
        lines.push(String::new());
        lines.push(log.raw_content.clone());
        lines.push(String::new());
        lines.push(String::new());
        lines.push(light.clone());
        lines.push(String::new());
    }

    lines.join("\n")
}
