//! Unified application error type.
//! Every fallible step (config, sheet loading, Jira calls) returns AppError
//! so `main` can report it uniformly and exit non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command '{0}' (expected 'create' or 'remove'), aborting")]
    UnknownCommand(String),

    #[error("Missing setting '{0}': pass it on the command line or set it in the config file")]
    MissingSetting(&'static str),

    #[error("Invalid row window: {0}")]
    InvalidRowWindow(String),

    #[error("Spreadsheet file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),

    // ---------------------------
    // Spreadsheet
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Sheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Remote API
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Jira API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected Jira payload: {0}")]
    Payload(String),
}

impl From<calamine::Error> for AppError {
    fn from(e: calamine::Error) -> Self {
        AppError::Sheet(e.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Problems with a single sheet row. These never abort a run: the flows
/// report them as warnings and move on to the next row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("row has {found} fields, but at least {required} are required")]
    TooFewFields { found: usize, required: usize },

    #[error("column '{field}' does not hold a valid {expected}: {value}")]
    InvalidCell {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("column 'issue_id' is empty")]
    MissingIssue,

    #[error("local time {0} does not exist in the local time zone (DST gap)")]
    NonexistentLocalTime(String),
}
