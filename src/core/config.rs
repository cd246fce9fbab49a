//! User configuration
//!
//! Read from `<config_dir>/stackup/config.yaml` when present, or from the path
//! given with `--config` / `STACKUP_CONFIG`. Every key is optional.
//!
//! ```yaml
//! policy: reject
//! view: enhanced
//! chart_width: 40
//! precision:
//!   total_length: 2
//!   worst_case: 2
//!   rss: 3
//! ```

use clap::ValueEnum;
use directories::ProjectDirs;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::policy::TolerancePolicy;

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Widest chart the text views will draw
pub const MAX_CHART_WIDTH: usize = 200;

/// Errors from loading the config file
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    #[diagnostic(code(stackup::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    #[diagnostic(
        code(stackup::config::parse),
        help("run `stackup config` to see the expected keys")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// Which presentation to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Result lines and the tolerance breakdown chart
    Simple,
    /// Adds the feature table and worst-case/RSS range bands
    #[default]
    Enhanced,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Simple => write!(f, "simple"),
            View::Enhanced => write!(f, "enhanced"),
        }
    }
}

/// Decimal places used when displaying results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precision {
    pub total_length: usize,
    pub worst_case: usize,
    /// RSS is shown one place finer than the worst-case bound
    pub rss: usize,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            total_length: 2,
            worst_case: 2,
            rss: 3,
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Negative tolerance handling at intake
    pub policy: TolerancePolicy,

    /// Default view for text output
    pub view: View,

    /// Display precision
    pub precision: Precision,

    /// Width of chart bars in columns
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: TolerancePolicy::default(),
            view: View::default(),
            precision: Precision::default(),
            chart_width: 40,
        }
    }
}

impl Config {
    /// Default config file location for this platform
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "stackup").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if a file is there, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // An empty file is valid and means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: Config =
            serde_yml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if config.chart_width > MAX_CHART_WIDTH {
            tracing::warn!(
                chart_width = config.chart_width,
                max = MAX_CHART_WIDTH,
                "chart_width too large; clamping"
            );
            config.chart_width = MAX_CHART_WIDTH;
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
