mod analyzer;
mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use chrono::Local;
use clap::Parser;

use analyzer::CommandAnalyzer;
use app::{Settings, collect_and_summarize, print_outcome};
use cli::Cli;
use config::Config;
use error::AppError;
use utils::init_tracing;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let settings = Settings::resolve(cli, &config)?;

    let analyzer = CommandAnalyzer::new(
        settings.analyzer_path.clone(),
        settings.analyzer_args.clone(),
        settings.timeout,
    );
    let outcome = collect_and_summarize(&settings, &analyzer, Local::now().naive_local())?;
    print_outcome(&outcome, &settings);
    Ok(())
}
