use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analyzer::{Analyzer, DEFAULT_ARGS, build_prompt, load_instructions};
use crate::cli::Cli;
use crate::config::Config;
use crate::consts::{DEFAULT_DAYS, DEFAULT_TIMEOUT_SECS};
use crate::core::{DateWindow, LogFileRef, ParsedLog, validate_days};
use crate::error::AppError;
use crate::output::{
    OutputPaths, completion_rate, format_bundle, render_log_table, update_latest_link, write_whole,
};
use crate::source::{LogLocator, parse_log_file};
use crate::utils::parse_date;

const DEFAULT_ANALYZER: &str = "claude";
const DEFAULT_INPUT_DIR: &str = "worklog_input";
const DEFAULT_SUMMARY_DIR: &str = "worklog_summary";
const DEFAULT_LATEST_LINK: &str = "latest_weekly_journal";

/// Everything one run needs, after merging CLI, config and defaults
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) root: PathBuf,
    pub(crate) days: u32,
    pub(crate) today: NaiveDate,
    pub(crate) analyze: bool,
    pub(crate) json: bool,
    pub(crate) analyzer_path: PathBuf,
    pub(crate) analyzer_args: Vec<String>,
    pub(crate) timeout: Duration,
    pub(crate) prompt_file: Option<PathBuf>,
    pub(crate) input_dir: PathBuf,
    pub(crate) summary_dir: PathBuf,
    pub(crate) create_dirs: bool,
    pub(crate) latest_link: PathBuf,
    pub(crate) use_color: bool,
    pub(crate) quiet: bool,
}

impl Settings {
    /// Validate and merge; configuration errors abort before any collection.
    pub(crate) fn resolve(cli: Cli, config: &Config) -> Result<Self, AppError> {
        let cli = cli.with_config(config);

        let today = match cli.today.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => Local::now().date_naive(),
        };
        let days = validate_days(cli.days.unwrap_or(DEFAULT_DAYS))?;
        DateWindow::resolve(today, days)?;

        let root = cli.root.clone().ok_or(AppError::MissingWorklogPath)?;
        if !root.is_dir() {
            return Err(AppError::WorklogPathNotFound { path: root });
        }

        Ok(Self {
            root,
            days,
            today,
            analyze: !cli.no_analysis,
            json: cli.json,
            analyzer_path: cli
                .analyzer
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ANALYZER)),
            analyzer_args: config
                .analyzer_args
                .clone()
                .unwrap_or_else(|| DEFAULT_ARGS.iter().map(|a| a.to_string()).collect()),
            timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            prompt_file: cli.prompt_file.clone(),
            input_dir: cli
                .input_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            summary_dir: cli
                .summary_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SUMMARY_DIR)),
            create_dirs: config.auto_create_dirs.unwrap_or(true),
            latest_link: config
                .latest_link
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LATEST_LINK)),
            use_color: cli.use_color(),
            quiet: cli.quiet,
        })
    }
}

#[derive(Debug)]
pub(crate) enum AnalysisStatus {
    Completed,
    /// The analyzer failed; its error message was written in place of the analysis
    Degraded(String),
}

#[derive(Debug)]
pub(crate) struct RunReport {
    pub(crate) range: String,
    pub(crate) logs: Vec<ParsedLog>,
    pub(crate) paths: OutputPaths,
    pub(crate) analysis: Option<AnalysisStatus>,
}

#[derive(Debug)]
pub(crate) enum Outcome {
    NoLogs { range: String },
    Json(String),
    Written(RunReport),
}

/// Collect the window's logs, write the bundle, and run the analyzer if enabled.
pub(crate) fn collect_and_summarize(
    settings: &Settings,
    analyzer: &dyn Analyzer,
    generated_at: NaiveDateTime,
) -> Result<Outcome, AppError> {
    let window = DateWindow::resolve(settings.today, settings.days)?;
    let range = window.describe(settings.days);
    if !settings.quiet {
        eprintln!("Collecting work logs: {range}");
    }

    let files = LogLocator::new(&settings.root, settings.today).locate(&window)?;
    if files.is_empty() {
        return Ok(Outcome::NoLogs { range });
    }
    if !settings.quiet {
        eprintln!("Found {} work log files", files.len());
    }

    let logs = parse_logs(&files);

    if settings.json {
        return Ok(Outcome::Json(serde_json::to_string_pretty(&logs)?));
    }

    let bundle = format_bundle(&logs, &range, generated_at);
    let paths = OutputPaths::for_window(&window, &settings.summary_dir, &settings.input_dir);

    if settings.create_dirs {
        create_dir(&settings.input_dir)?;
        if settings.analyze {
            create_dir(&settings.summary_dir)?;
        }
    }

    write_whole(&paths.input, &bundle)
        .map_err(|e| AppError::io(format!("Failed to write {}", paths.input.display()), e))?;

    let analysis = if settings.analyze {
        Some(run_analysis(settings, analyzer, &bundle, &paths)?)
    } else {
        None
    };

    Ok(Outcome::Written(RunReport {
        range,
        logs,
        paths,
        analysis,
    }))
}

/// Parse each file; unreadable files are reported and skipped.
fn parse_logs(files: &[LogFileRef]) -> Vec<ParsedLog> {
    files
        .iter()
        .filter_map(|file| match parse_log_file(file) {
            Ok(log) => {
                tracing::debug!(
                    path = %file.path.display(),
                    completed = log.tasks.completed.len(),
                    pending = log.tasks.pending.len(),
                    sections = log.sections.len(),
                    "parsed work log"
                );
                Some(log)
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable work log");
                None
            }
        })
        .collect()
}

fn run_analysis(
    settings: &Settings,
    analyzer: &dyn Analyzer,
    bundle: &str,
    paths: &OutputPaths,
) -> Result<AnalysisStatus, AppError> {
    if !settings.quiet {
        eprintln!("Running analyzer {}...", settings.analyzer_path.display());
    }
    let instructions = load_instructions(settings.prompt_file.as_deref());
    let prompt = build_prompt(&instructions, bundle);

    let (text, status) = match analyzer.analyze(&prompt) {
        Ok(text) => (text, AnalysisStatus::Completed),
        Err(err) => {
            tracing::warn!(error = %err, exit_code = ?err.exit_code(), "analysis failed");
            let message = err.to_string();
            (message.clone(), AnalysisStatus::Degraded(message))
        }
    };

    write_whole(&paths.summary, &text)
        .map_err(|e| AppError::io(format!("Failed to write {}", paths.summary.display()), e))?;

    if let Err(err) = update_latest_link(&settings.latest_link, &paths.summary) {
        tracing::warn!(
            link = %settings.latest_link.display(),
            error = %err,
            "failed to update latest link"
        );
    }

    Ok(status)
}

fn create_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir)
        .map_err(|e| AppError::io(format!("Failed to create {}", dir.display()), e))
}

pub(crate) fn print_outcome(outcome: &Outcome, settings: &Settings) {
    match outcome {
        Outcome::NoLogs { range } => println!("No work log files found ({range})."),
        Outcome::Json(json) => println!("{json}"),
        Outcome::Written(report) => {
            if !settings.quiet {
                println!("{}", render_log_table(&report.logs, settings.use_color));
                if let Some(rate) = completion_rate(&report.logs) {
                    println!("\n  Range: {} | completion rate {rate}%\n", report.range);
                } else {
                    println!("\n  Range: {}\n", report.range);
                }
            }
            println!("Log bundle: {}", report.paths.input.display());
            match &report.analysis {
                Some(AnalysisStatus::Completed) => {
                    println!("Analysis:   {}", report.paths.summary.display());
                }
                Some(AnalysisStatus::Degraded(message)) => {
                    println!(
                        "Analysis:   {} (degraded: {message})",
                        report.paths.summary.display()
                    );
                }
                None => {}
            }
        }
    }
}
