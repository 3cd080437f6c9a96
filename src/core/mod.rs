//! Core module - date windows and the shared log data model

mod types;
mod window;

pub(crate) use types::{LogFileRef, ParsedLog, Section, TaskList};
pub(crate) use window::{DateWindow, validate_days};
