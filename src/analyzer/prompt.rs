//! Analysis prompt assembly

use std::fs;
use std::path::Path;

use crate::output::heavy_separator;

pub(crate) const DEFAULT_INSTRUCTIONS: &str = r#"# Work Log Analysis

Analyze the work log content below and produce a concise work summary with
recommendations.

## What to cover

### 1. Overall statistics
- Number of days with a log in the period
- Total, completed and pending checklist items
- Completion rate
- Observations on pace and focus

### 2. Work categories
Group the work by theme (development, configuration and asset management,
testing and integration, documentation and planning, other) and estimate the
share of effort in each.

### 3. Key results
- The most important completed work
- Notable technical progress
- Quantifiable outcomes

### 4. Problems and risks
- Key items still open
- Likely blockers
- Early warnings

### 5. Suggestions
- Working method
- Task management
- Time allocation
- Process

### 6. Next period
Based on open items and progress, propose priorities for the next period with
rough estimates and dependencies.

## Output format

Respond in markdown with one heading per area above. Base every statement on
the log content, support conclusions with concrete numbers, keep suggestions
actionable, and do not restate each day's log in full.
"#;

const CONTENT_LABEL: &str = "work log content:";
const CLOSING: &str = "Please begin the analysis.";

/// Instructions from `prompt_file` when it can be read, else the built-in default.
pub(crate) fn load_instructions(prompt_file: Option<&Path>) -> String {
    let Some(path) = prompt_file.filter(|p| p.exists()) else {
        return DEFAULT_INSTRUCTIONS.to_string();
    };
    match fs::read_to_string(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), "loaded analysis prompt");
            text
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read prompt file, using default instructions");
            DEFAULT_INSTRUCTIONS.to_string()
        }
    }
}

/// Full prompt passed to the analyzer: instructions, a delimited label, then the bundle.
pub(crate) fn build_prompt(instructions: &str, bundle: &str) -> String {
    let sep = heavy_separator();
    format!("\n{instructions}\n\n{sep}\n{CONTENT_LABEL}\n{sep}\n\n{bundle}\n\n{CLOSING}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn prompt_layout() {
        let prompt = build_prompt("Summarize.", "BUNDLE");
        let sep = "=".repeat(80);
        assert_eq!(
            prompt,
            format!("\nSummarize.\n\n{sep}\nwork log content:\n{sep}\n\nBUNDLE\n\nPlease begin the analysis.\n")
        );
    }

    #[test]
    fn missing_prompt_file_uses_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prompt.md");
        assert_eq!(load_instructions(Some(&path)), DEFAULT_INSTRUCTIONS);
        assert_eq!(load_instructions(None), DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn prompt_file_overrides_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prompt.md");
        fs::write(&path, "Only list blockers.").unwrap();
        assert_eq!(load_instructions(Some(&path)), "Only list blockers.");
    }

    #[test]
    fn unreadable_prompt_file_uses_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prompt.md");
        fs::write(&path, [0xff, 0xfe]).unwrap();
        assert_eq!(load_instructions(Some(&path)), DEFAULT_INSTRUCTIONS);
    }
}
