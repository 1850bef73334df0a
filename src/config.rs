//! Output theme and user configuration.
//!
//! Configuration is read from `<config dir>/git-ninja/config.toml`; a missing
//! file means defaults.

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use colored::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

use crate::ranking::RankingThresholds;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Theme colors for git-ninja output
pub struct Theme {
    /// Relative times and checkout counts
    pub label: Color,
    pub branch: Color,
    pub rank: Color,
    /// The current-branch entry shown when nothing else qualifies
    pub fallback: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: Color::Yellow,
            branch: Color::White,
            rank: Color::Magenta,
            fallback: Color::Green,
        }
    }
}

/// Check if colors should be enabled.
/// Respects NO_COLOR standard (https://no-color.org/) and TTY detection.
pub fn colors_enabled() -> bool {
    colors_enabled_with(|name| std::env::var_os(name).is_some(), std::io::stdout().is_terminal())
}

fn colors_enabled_with<F>(is_set: F, is_terminal: bool) -> bool
where
    F: Fn(&str) -> bool,
{
    !is_set("NO_COLOR") && is_terminal
}

/// Set up color handling based on environment.
/// Call this early in main().
pub fn setup_colors() {
    if !colors_enabled() {
        colored::control::set_override(false);
    }
}

/// Knobs for the ranking commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Branches checked out within this many days form the "very recent" bucket
    pub recent_days: u32,

    /// Branches last checked out longer ago than this are "truly old"
    pub older_days: u32,

    /// Default number of entries for `branch:recent`
    pub recent_limit: usize,

    /// Default number of entries for `branch:freq`
    pub freq_limit: usize,

    /// Regex of branch names to leave out of listings
    pub exclude: Option<String>,

    /// Re-rank `branch:recent` by open issue keys when the tracker is configured
    pub use_issue_priority: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            recent_days: 3,
            older_days: 14,
            recent_limit: 10,
            freq_limit: 20,
            exclude: None,
            use_issue_priority: false,
        }
    }
}

/// Longest look-back window accepted for either threshold, about a century.
pub const MAX_WINDOW_DAYS: u32 = 36_500;

impl RankingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recent_days == 0 {
            return Err(ConfigError::Invalid("recent_days must be at least 1".to_string()));
        }

        if self.older_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::Invalid(format!(
                "older_days ({}) must be at most {}",
                self.older_days, MAX_WINDOW_DAYS
            )));
        }

        if self.older_days <= self.recent_days {
            return Err(ConfigError::Invalid(format!(
                "older_days ({}) must be greater than recent_days ({})",
                self.older_days, self.recent_days
            )));
        }

        Ok(())
    }

    /// Bucket cut-offs relative to `now`.
    pub fn thresholds(&self, now: OffsetDateTime) -> Result<RankingThresholds, ConfigError> {
        Ok(RankingThresholds::new(
            days_before(now, "recent_days", self.recent_days)?,
            days_before(now, "older_days", self.older_days)?,
        ))
    }
}

fn days_before(now: OffsetDateTime, field: &str, days: u32) -> Result<OffsetDateTime, ConfigError> {
    now.checked_sub(Duration::days(i64::from(days))).ok_or_else(|| {
        ConfigError::Invalid(format!("{} ({}) reaches before the earliest supported date", field, days))
    })
}

/// Top level of config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ranking: RankingConfig,
}

impl Config {
    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;

        config.ranking.validate()?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("git-ninja").join("config.toml"))
    }
}
