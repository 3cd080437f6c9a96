//! Work log file discovery
//!
//! Walks `<root>/<year>/<month>/*.md` and keeps the files whose filename date
//! falls inside the requested window.

use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::LOG_SUFFIX;
use crate::core::{DateWindow, LogFileRef};
use crate::error::AppError;

use super::filename::parse_filename_date;

pub(crate) struct LogLocator {
    root: PathBuf,
    /// Only the directory named after this year is searched
    current_year: i32,
}

impl LogLocator {
    pub(crate) fn new(root: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            root: root.into(),
            current_year: today.year(),
        }
    }

    /// Locate log files inside `window`, sorted by path.
    pub(crate) fn locate(&self, window: &DateWindow) -> Result<Vec<LogFileRef>, AppError> {
        let year_name = self.current_year.to_string();
        let entries = fs::read_dir(&self.root).map_err(|e| {
            AppError::io(format!("Failed to read {}", self.root.display()), e)
        })?;

        let mut found = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_dir() || entry.file_name().to_str() != Some(year_name.as_str()) {
                continue;
            }
            for month_dir in month_dirs(&path) {
                collect_month(&month_dir, window, &mut found);
            }
        }

        found.sort();
        Ok(found)
    }
}

/// Month directories `1`..=`12` (leading zeros allowed), hidden entries skipped
fn month_dirs(year_dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(year_dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %year_dir.display(), error = %err, "cannot read year directory");
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter(|entry| {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                return false;
            };
            !name.starts_with('.')
                && name
                    .parse::<u32>()
                    .is_ok_and(|month| (1..=12).contains(&month))
        })
        .map(|entry| entry.path())
        .collect()
}

fn collect_month(month_dir: &Path, window: &DateWindow, found: &mut Vec<LogFileRef>) {
    let pattern = format!(
        "{}/*{}",
        glob::Pattern::escape(&month_dir.to_string_lossy()),
        LOG_SUFFIX
    );
    // Dotfiles count too; only hidden month directories are skipped.
    let paths = match glob::glob_with(&pattern, glob::MatchOptions::new()) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::warn!(path = %month_dir.display(), error = %err, "invalid month directory pattern");
            return;
        }
    };

    for path in paths.flatten() {
        if !path.is_file() {
            continue;
        }
        let date = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_filename_date);
        match date {
            Some(date) if window.contains(date) => found.push(LogFileRef {
                path,
                date: Some(date),
            }),
            Some(_) => {}
            None => tracing::debug!(path = %path.display(), "no date in filename, skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "- [x] done\n").unwrap();
    }

    fn names(found: &[LogFileRef]) -> Vec<String> {
        found
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn work_week_selects_monday_through_friday() {
        let tmp = TempDir::new().unwrap();
        for day in ["20251103", "20251104", "20251105", "20251106", "20251107", "20251110"] {
            touch(tmp.path(), &format!("2025/11/{day}.md"));
        }
        // Wednesday after the target week
        let today = d(2025, 11, 12);
        let window = DateWindow::resolve(today, 5).unwrap();
        let found = LogLocator::new(tmp.path(), today).locate(&window).unwrap();

        assert_eq!(
            names(&found),
            vec![
                "20251103.md",
                "20251104.md",
                "20251105.md",
                "20251106.md",
                "20251107.md"
            ]
        );
        assert_eq!(found[0].date, Some(d(2025, 11, 3)));
    }

    #[test]
    fn results_are_sorted_across_months() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2025/11/20251103.md");
        touch(tmp.path(), "2025/10/20251031.md");
        touch(tmp.path(), "2025/10/20251030周四.md");
        let today = d(2025, 11, 4);
        let window = DateWindow::resolve(today, 7).unwrap();
        let found = LogLocator::new(tmp.path(), today).locate(&window).unwrap();

        assert_eq!(
            names(&found),
            vec!["20251030周四.md", "20251031.md", "20251103.md"]
        );
    }

    #[test]
    fn skips_hidden_and_non_month_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2025/11/20251105.md");
        touch(tmp.path(), "2025/.11/20251105.md");
        touch(tmp.path(), "2025/13/20251105.md");
        touch(tmp.path(), "2025/0/20251105.md");
        touch(tmp.path(), "2025/drafts/20251105.md");
        let today = d(2025, 11, 6);
        let window = DateWindow::resolve(today, 3).unwrap();
        let found = LogLocator::new(tmp.path(), today).locate(&window).unwrap();

        assert_eq!(found.len(), 1);
        assert!(found[0].path.ends_with("2025/11/20251105.md"));
    }

    #[test]
    fn skips_undated_and_non_markdown_files_but_keeps_dotfiles() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2025/11/20251105.md");
        touch(tmp.path(), "2025/11/notes.md");
        touch(tmp.path(), "2025/11/20251105.txt");
        touch(tmp.path(), "2025/11/.20251105.md");
        touch(tmp.path(), "2025/11/20251105/20251105.md");
        let today = d(2025, 11, 6);
        let window = DateWindow::resolve(today, 3).unwrap();
        let found = LogLocator::new(tmp.path(), today).locate(&window).unwrap();

        assert_eq!(names(&found), vec![".20251105.md", "20251105.md"]);
    }

    #[test]
    fn only_the_current_year_is_searched() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2025/12/20251231.md");
        touch(tmp.path(), "2026/01/20260101.md");
        let today = d(2026, 1, 2);
        let window = DateWindow::resolve(today, 7).unwrap();
        let found = LogLocator::new(tmp.path(), today).locate(&window).unwrap();

        assert_eq!(names(&found), vec!["20260101.md"]);
    }

    #[test]
    fn locating_twice_is_stable() {
        let tmp = TempDir::new().unwrap();
        for day in ["20251105", "20251103", "20251104"] {
            touch(tmp.path(), &format!("2025/11/{day}.md"));
        }
        let today = d(2025, 11, 6);
        let window = DateWindow::resolve(today, 7).unwrap();
        let locator = LogLocator::new(tmp.path(), today);

        assert_eq!(locator.locate(&window).unwrap(), locator.locate(&window).unwrap());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let today = d(2025, 11, 6);
        let window = DateWindow::resolve(today, 7).unwrap();
        let result = LogLocator::new(tmp.path().join("absent"), today).locate(&window);

        assert!(matches!(result, Err(AppError::Io { .. })));
    }
}
