//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "worklog-summary")]
#[command(
    about = "Collect dated markdown work logs and summarize them with an external analyzer",
    version
)]
pub(crate) struct Cli {
    /// Number of days to collect; 5 selects the most recent complete work week
    #[arg(value_name = "DAYS", allow_negative_numbers = true)]
    pub(crate) days: Option<i64>,

    /// Only collect logs and write the bundle, skip the external analyzer
    #[arg(long)]
    pub(crate) no_analysis: bool,

    /// Print the parsed logs as JSON instead of writing any files
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Work log root containing <year>/<month>/*.md
    #[arg(short, long, value_name = "PATH")]
    pub(crate) root: Option<PathBuf>,

    /// Config file to use instead of the standard locations
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Analyzer executable
    #[arg(long, value_name = "PATH")]
    pub(crate) analyzer: Option<PathBuf>,

    /// File with analysis instructions (built-in instructions when missing)
    #[arg(long, value_name = "PATH")]
    pub(crate) prompt_file: Option<PathBuf>,

    /// Directory for the aggregated log bundle
    #[arg(long, value_name = "DIR")]
    pub(crate) input_dir: Option<PathBuf>,

    /// Directory for the analysis result
    #[arg(long, value_name = "DIR")]
    pub(crate) summary_dir: Option<PathBuf>,

    /// Treat this date as today (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE", hide = true)]
    pub(crate) today: Option<String>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Only print errors and the final report
    #[arg(short, long, conflicts_with = "debug")]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.days.is_none() {
            self.days = config.default_days;
        }
        if !self.no_analysis && config.analysis == Some(false) {
            self.no_analysis = true;
        }

        // Path options: only apply if CLI didn't set them
        if self.root.is_none() {
            self.root = config.worklog_path.clone();
        }
        if self.analyzer.is_none() {
            self.analyzer = config.analyzer_path.clone();
        }
        if self.prompt_file.is_none() {
            self.prompt_file = config.prompt_file.clone();
        }
        if self.input_dir.is_none() {
            self.input_dir = config.input_dir.clone();
        }
        if self.summary_dir.is_none() {
            self.summary_dir = config.summary_dir.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("worklog-summary").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn positional_days_and_flags() {
        let cli = parse(&["7", "--no-analysis"]);
        assert_eq!(cli.days, Some(7));
        assert!(cli.no_analysis);
    }

    #[test]
    fn negative_days_reach_validation() {
        assert_eq!(parse(&["-3"]).days, Some(-3));
    }

    #[test]
    fn non_numeric_days_are_rejected() {
        assert!(Cli::try_parse_from(["worklog-summary", "week"]).is_err());
    }

    #[test]
    fn cli_wins_over_config() {
        let config = Config {
            worklog_path: Some(PathBuf::from("/from/config")),
            default_days: Some(7),
            analysis: Some(false),
            summary_dir: Some(PathBuf::from("reports")),
            ..Config::default()
        };
        let cli = parse(&["5", "--root", "/from/cli"]).with_config(&config);
        assert_eq!(cli.days, Some(5));
        assert_eq!(cli.root, Some(PathBuf::from("/from/cli")));
        assert!(cli.no_analysis);
        assert_eq!(cli.summary_dir, Some(PathBuf::from("reports")));
    }

    #[test]
    fn config_fills_missing_values() {
        let config = Config {
            default_days: Some(10),
            analysis: Some(true),
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.days, Some(10));
        assert!(!cli.no_analysis);
    }

    #[test]
    fn no_color_overrides_color_mode() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
        assert!(parse(&["--color", "always"]).use_color());
    }
}
