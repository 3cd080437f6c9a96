//! Work log source layer
//!
//! Finds dated markdown files under the work log root and parses each one
//! into a [`ParsedLog`](crate::core::ParsedLog).

mod filename;
mod locator;
mod parser;

pub(crate) use locator::LogLocator;
pub(crate) use parser::parse_log_file;
