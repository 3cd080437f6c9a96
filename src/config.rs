use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

const APP_DIR: &str = "worklog-summary";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Root of the `<year>/<month>/*.md` work log tree
    #[serde(default)]
    pub(crate) worklog_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) default_days: Option<i64>,
    /// Run the external analyzer unless `--no-analysis` is given
    #[serde(default)]
    pub(crate) analysis: Option<bool>,
    #[serde(default)]
    pub(crate) analyzer_path: Option<PathBuf>,
    #[serde(default)]
    pub(crate) analyzer_args: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) prompt_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) input_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) summary_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) auto_create_dirs: Option<bool>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) latest_link: Option<PathBuf>,
}

impl Config {
    /// Load an explicitly requested config file; any failure is fatal.
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// First readable config from the standard locations, else defaults.
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str::<Config>(content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/worklog-summary/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/worklog-summary/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.worklog-summary.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(format!(".{APP_DIR}.toml")));
        }

        paths
    }
}
