use crate::config::MatchScope;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for wlsync
/// CLI application to push spreadsheet worklogs to Jira
#[derive(Parser)]
#[command(
    name = "wlsync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read a spreadsheet containing worklog entries, and add them to (or remove them from) Jira",
    long_about = None
)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(global = true, short = 'd', long = "debug")]
    pub debug: bool,

    /// Yes, really create/delete worklogs in Jira (default is a dry run)
    #[arg(global = true, short = 'y', long = "yes", visible_alias = "yolo")]
    pub yes: bool,

    /// Path to the spreadsheet file (xlsx, xls, xlsb, ods or csv)
    #[arg(global = true, short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Name of the sheet (tab) holding the worklog entries (default: first sheet)
    #[arg(global = true, short = 'n', long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// First row to import (0-based, inclusive)
    #[arg(global = true, short = 's', long = "start", default_value_t = 0)]
    pub start: usize,

    /// Row to stop importing at (0-based, exclusive; 0 = until the last row)
    #[arg(global = true, short = 'e', long = "end")]
    pub end: Option<usize>,

    /// The URL where Jira is hosted
    #[arg(global = true, short = 'u', long = "jira-url", value_name = "URL")]
    pub jira_url: Option<String>,

    /// Personal access token for Jira
    #[arg(global = true, short = 't', long = "jira-token", value_name = "TOKEN")]
    pub jira_token: Option<String>,

    /// Settings file (default: ~/.wlsync/wlsync.conf)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create one Jira worklog per spreadsheet row
    Create,

    /// Find and delete the Jira worklogs described by the spreadsheet rows
    Remove {
        /// Compare each row against the worklogs of every issue loaded so far
        /// (`all`) or only against its own issue (`issue`)
        #[arg(long = "match-scope", value_enum)]
        match_scope: Option<MatchScope>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Create => "create",
            Commands::Remove { .. } => "remove",
        }
    }
}
