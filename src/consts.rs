/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact date format embedded in log filenames and output filenames: "20250115"
pub(crate) const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Timestamp format for the bundle header
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder shown when a log's date cannot be recovered from its filename
pub(crate) const UNKNOWN_DATE: &str = "unknown date";

/// Day-count that selects the most recent complete Monday-Friday week
pub(crate) const WORK_WEEK_DAYS: u32 = 5;

/// Suffix of work log files
pub(crate) const LOG_SUFFIX: &str = ".md";

/// Upper bound on a single external analyzer run, in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Width of the separator lines in the bundle and prompt
pub(crate) const SEPARATOR_WIDTH: usize = 80;

/// Day-count used when neither the command line nor the config gives one
pub(crate) const DEFAULT_DAYS: i64 = 5;
