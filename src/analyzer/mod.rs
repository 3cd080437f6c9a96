//! External analysis tool seam
//!
//! The analyzer is an opaque process: it receives the full prompt and returns
//! its analysis text, or an [`AnalyzerError`].

mod command;
mod prompt;

use crate::error::AnalyzerError;

pub(crate) use command::{CommandAnalyzer, DEFAULT_ARGS};
pub(crate) use prompt::{build_prompt, load_instructions};

pub(crate) trait Analyzer {
    fn analyze(&self, prompt: &str) -> Result<String, AnalyzerError>;
}
