//! Core data types for located and parsed work logs

use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

/// A work log file found on disk, with the date recovered from its filename
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct LogFileRef {
    pub(crate) path: PathBuf,
    pub(crate) date: Option<NaiveDate>,
}

/// Checklist items split by completion state, in file order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TaskList {
    pub(crate) completed: Vec<String>,
    pub(crate) pending: Vec<String>,
}

/// Heading-delimited block of a log file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) content: String,
}

/// One log file after parsing.
///
/// `date` is a display string: `YYYY-MM-DD`, or the unknown-date placeholder
/// when the filename carries no usable date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ParsedLog {
    pub(crate) date: String,
    pub(crate) file_path: String,
    pub(crate) tasks: TaskList,
    pub(crate) sections: Vec<Section>,
    pub(crate) raw_content: String,
}
