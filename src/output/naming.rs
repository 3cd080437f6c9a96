//! Output file naming

use std::path::{Path, PathBuf};

use crate::core::DateWindow;

const SUMMARY_PREFIX: &str = "worklog_summary";
const INPUT_PREFIX: &str = "worklog_input";

/// Where one run writes its analysis result and its raw bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutputPaths {
    pub(crate) summary: PathBuf,
    pub(crate) input: PathBuf,
}

impl OutputPaths {
    /// `<summary_dir>/worklog_summary_<tag>.txt` and `<input_dir>/worklog_input_<tag>.txt`,
    /// where the tag is `YYYYMMDD_to_YYYYMMDD` from the resolved window.
    pub(crate) fn for_window(window: &DateWindow, summary_dir: &Path, input_dir: &Path) -> Self {
        let tag = window.file_tag();
        Self {
            summary: summary_dir.join(format!("{SUMMARY_PREFIX}_{tag}.txt")),
            input: input_dir.join(format!("{INPUT_PREFIX}_{tag}.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn work_week_paths() {
        let window = DateWindow::resolve(d(2025, 11, 12), 5).unwrap();
        let paths = OutputPaths::for_window(
            &window,
            Path::new("worklog_summary"),
            Path::new("worklog_input"),
        );
        assert_eq!(
            paths.summary,
            PathBuf::from("worklog_summary/worklog_summary_20251103_to_20251107.txt")
        );
        assert_eq!(
            paths.input,
            PathBuf::from("worklog_input/worklog_input_20251103_to_20251107.txt")
        );
    }

    #[test]
    fn trailing_window_paths() {
        let window = DateWindow::resolve(d(2025, 11, 12), 10).unwrap();
        let paths = OutputPaths::for_window(&window, Path::new("out"), Path::new("in"));
        assert_eq!(
            paths.summary,
            PathBuf::from("out/worklog_summary_20251102_to_20251112.txt")
        );
        assert_eq!(
            paths.input,
            PathBuf::from("in/worklog_input_20251102_to_20251112.txt")
        );
    }

    #[test]
    fn same_window_same_paths() {
        let a = DateWindow::resolve(d(2025, 11, 10), 5).unwrap();
        let b = DateWindow::resolve(d(2025, 11, 13), 5).unwrap();
        assert_eq!(
            OutputPaths::for_window(&a, Path::new("s"), Path::new("i")),
            OutputPaths::for_window(&b, Path::new("s"), Path::new("i"))
        );
    }
}
