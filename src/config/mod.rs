use crate::cli::parser::{Cli, Commands};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Which cached worklogs a row is compared against in `remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchScope {
    /// Every worklog loaded so far, across all issues seen in this run.
    #[default]
    All,
    /// Only the worklogs of the row's own issue.
    Issue,
}

/// Dry-run reports what would happen; confirm talks to Jira for real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    DryRun,
    Confirm,
}

impl Mode {
    pub fn is_confirm(self) -> bool {
        self == Mode::Confirm
    }
}

/// Half-open window `[start, end)` of 0-based sheet row indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub start: usize,
    pub end: Option<usize>,
}

impl RowWindow {
    /// Validate the bounds given on the command line. An end of 0 means
    /// "until the last row", unless start is 0 as well.
    pub fn new(start: usize, end: Option<usize>) -> AppResult<Self> {
        if let Some(e) = end {
            if e == start {
                return Err(AppError::InvalidRowWindow(format!(
                    "can't start and end at the same row index ({})",
                    e
                )));
            }
            if e > 0 && e < start {
                return Err(AppError::InvalidRowWindow(format!(
                    "end row {} is before start row {}",
                    e, start
                )));
            }
        }
        Ok(Self {
            start,
            end: end.filter(|e| *e > 0),
        })
    }

    pub fn contains(&self, idx: usize) -> bool {
        idx >= self.start && self.end.is_none_or(|e| idx < e)
    }
}

impl Default for RowWindow {
    fn default() -> Self {
        Self {
            start: 0,
            end: None,
        }
    }
}

/// Optional settings file, so the Jira URL and token do not have to be
/// typed on every invocation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub jira_url: Option<String>,
    #[serde(default)]
    pub jira_token: Option<String>,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub match_scope: Option<MatchScope>,
}

impl Settings {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wlsync")
    }

    /// Return the full path of the default settings file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wlsync.conf")
    }

    /// Load settings from `explicit` or from the default location.
    /// A missing default file yields empty settings; a missing explicit one
    /// is an error.
    pub fn load(explicit: Option<&str>) -> AppResult<Self> {
        let path = match explicit {
            Some(p) => {
                let p = expand_tilde(p);
                if !p.is_file() {
                    return Err(AppError::Config(format!(
                        "config file '{}' does not exist",
                        p.display()
                    )));
                }
                p
            }
            None => {
                let p = Self::config_file();
                if !p.is_file() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|e| {
            AppError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })
    }
}

/// Everything a run needs, resolved once from the command line and the
/// settings file and then only read.
#[derive(Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub debug: bool,
    pub file: PathBuf,
    pub sheet: Option<String>,
    pub window: RowWindow,
    pub jira_url: String,
    pub jira_token: String,
    pub match_scope: MatchScope,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        // Row bounds are checked before touching any file.
        let window = RowWindow::new(cli.start, cli.end)?;
        let settings = Settings::load(cli.config.as_deref())?;
        Self::resolve(cli, settings, window)
    }

    fn resolve(cli: &Cli, settings: Settings, window: RowWindow) -> AppResult<Self> {
        let file = cli
            .file
            .as_deref()
            .map(expand_tilde)
            .ok_or(AppError::MissingSetting("file"))?;
        if !file.is_file() {
            return Err(AppError::FileNotFound(file));
        }

        let jira_url = cli
            .jira_url
            .clone()
            .or(settings.jira_url)
            .filter(|u| !u.trim().is_empty())
            .ok_or(AppError::MissingSetting("jira-url"))?;
        let jira_token = cli
            .jira_token
            .clone()
            .or(settings.jira_token)
            .filter(|t| !t.trim().is_empty())
            .ok_or(AppError::MissingSetting("jira-token"))?;

        let match_scope = match &cli.command {
            Commands::Remove {
                match_scope: Some(scope),
            } => *scope,
            _ => settings.match_scope.unwrap_or_default(),
        };

        Ok(Self {
            mode: if cli.yes { Mode::Confirm } else { Mode::DryRun },
            debug: cli.debug,
            file,
            sheet: cli.sheet.clone().or(settings.sheet),
            window,
            jira_url: jira_url.trim_end_matches('/').to_string(),
            jira_token,
            match_scope,
        })
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("mode", &self.mode)
            .field("debug", &self.debug)
            .field("file", &self.file)
            .field("sheet", &self.sheet)
            .field("window", &self.window)
            .field("jira_url", &self.jira_url)
            .field("jira_token", &"<redacted>")
            .field("match_scope", &self.match_scope)
            .finish()
    }
}
