//! Configuration
//!
//! Options shared by every subcommand. Each can be given on the command line
//! or through the environment, and a `.env` file is read before parsing.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::report::ReportFormat;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "fixtures/catalog.yml";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    #[default]
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Global settings.
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Catalog of clients and products (YAML)
    #[arg(long, global = true, env = "TALLY_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Report format (text, table)
    #[arg(long, global = true, env = "TALLY_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, global = true, env = "TALLY_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG_PATH),
            format: ReportFormat::default(),
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

/// Load a `.env` file from the working directory or one of its parents.
///
/// Returns the path that was loaded, or `None` when there is no `.env` file.
///
/// # Errors
///
/// Returns an error if a `.env` file exists but can't be read or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenvy::dotenv().map(Some).or_else(ignore_missing)
}

/// Load the `.env` file at `path`, if there is one.
///
/// # Errors
///
/// Returns an error if the file exists but can't be read or parsed.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenvy::from_path(path)
        .map(|()| Some(path.to_path_buf()))
        .or_else(ignore_missing)
}

fn ignore_missing(error: dotenvy::Error) -> Result<Option<PathBuf>, dotenvy::Error> {
    if error.not_found() {
        Ok(None)
    } else {
        Err(error)
    }
}
