use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid day count {input} (expected a positive number of days)")]
    InvalidDays { input: i64 },

    #[error("Work log path is not configured (set worklog_path in the config file or pass --root)")]
    MissingWorklogPath,

    #[error("Work log path does not exist: {}", .path.display())]
    WorklogPathNotFound { path: PathBuf },

    #[error("Failed to load config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize logs: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl AppError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            context: context.into(),
            source,
        }
    }
}

/// A single log file could not be opened or decoded as UTF-8.
#[derive(Debug, Error)]
#[error("Failed to read {}: {source}", .path.display())]
pub(crate) struct LogReadError {
    pub(crate) path: PathBuf,
    #[source]
    pub(crate) source: std::io::Error,
}

#[derive(Debug, Error)]
pub(crate) enum AnalyzerError {
    #[error("Analyzer not found: {}", .program.display())]
    NotFound { program: PathBuf },

    #[error("Failed to run analyzer: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to wait for analyzer: {0}")]
    Wait(std::io::Error),

    #[error("Analysis timed out after {}s, retry or analyze manually", .0.as_secs())]
    Timeout(Duration),

    #[error("Analysis failed: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("Invalid UTF-8 from analyzer: {0}")]
    Utf8(std::string::FromUtf8Error),
}

impl AnalyzerError {
    /// Exit status of an analyzer that ran to completion and failed
    pub(crate) fn exit_code(&self) -> Option<i32> {
        match self {
            AnalyzerError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}
