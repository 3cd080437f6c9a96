//! Markdown work log parser
//!
//! Extracts checklist tasks and heading-delimited sections from a single log
//! file. Only two line forms are recognized; everything else is plain text.

use std::fs;
use std::path::Path;

use crate::consts::{DATE_FORMAT, UNKNOWN_DATE};
use crate::core::{LogFileRef, ParsedLog, Section, TaskList};
use crate::error::LogReadError;

use super::filename::parse_filename_date;

/// Read and parse one located log file.
pub(crate) fn parse_log_file(file: &LogFileRef) -> Result<ParsedLog, LogReadError> {
    let raw_content = fs::read_to_string(&file.path).map_err(|source| LogReadError {
        path: file.path.clone(),
        source,
    })?;
    Ok(parse_log_text(&file.path, raw_content))
}

/// Parse already-loaded log text. The date is recomputed from the filename.
pub(crate) fn parse_log_text(path: &Path, raw_content: String) -> ParsedLog {
    let date = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(parse_filename_date)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    ParsedLog {
        date,
        file_path: path.display().to_string(),
        tasks: extract_tasks(&raw_content),
        sections: extract_sections(&raw_content),
        raw_content,
    }
}

/// Collect `- [x] text` / `- [ ] text` items in file order.
fn extract_tasks(content: &str) -> TaskList {
    let mut tasks = TaskList::default();
    for line in content.split('\n') {
        let Some((mark, text)) = parse_task_line(line) else {
            continue;
        };
        if mark.eq_ignore_ascii_case(&'x') {
            tasks.completed.push(text.to_string());
        } else {
            tasks.pending.push(text.to_string());
        }
    }
    tasks
}

/// Split a checklist line into its bracket mark and trimmed text.
///
/// Shape: optional indent, `-`, optional whitespace, `[` one char `]`, then at
/// least one more character. Text that is blank after trimming still counts.
fn parse_task_line(line: &str) -> Option<(char, &str)> {
    let rest = line.trim_start().strip_prefix('-')?;
    let rest = rest.trim_start().strip_prefix('[')?;

    let mut chars = rest.chars();
    let mark = chars.next()?;
    let rest = chars.as_str().strip_prefix(']')?;

    if rest.is_empty() {
        return None;
    }
    Some((mark, rest.trim()))
}

/// Split the file at heading lines. Text before the first heading is dropped,
/// as is a heading with an empty title together with its body.
fn extract_sections(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in content.split('\n') {
        if line.starts_with('#') {
            if let Some((title, body)) = current.take() {
                sections.extend(finish_section(title, &body));
            }
            let title = line.trim_start_matches('#').trim().to_string();
            current = Some((title, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((title, body)) = current {
        sections.extend(finish_section(title, &body));
    }
    sections
}

fn finish_section(title: String, body: &[&str]) -> Option<Section> {
    if title.is_empty() {
        return None;
    }
    Some(Section {
        title,
        content: body.join("\n").trim().to_string(),
    })
}
