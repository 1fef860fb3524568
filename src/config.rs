//! Backend location and logging settings.
//!
//! Sources, lowest precedence first: built-in fallbacks, the TOML file at
//! `~/.config/lawvriksh-onboard/config.toml`, the `LAWVRIKSH_API_URL`
//! environment variable, then the `--api-url` flag.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "LAWVRIKSH_API_URL";

/// Fallback base for `/api/register` when nothing is configured.
pub const REGISTER_FALLBACK_BASE: &str = "http://localhost:3000";

/// Fallback base for `/api/feedback` when nothing is configured.
///
/// Differs from [`REGISTER_FALLBACK_BASE`]; the deployed default has not
/// been confirmed, so the two stay separate.
pub const FEEDBACK_FALLBACK_BASE: &str = "http://localhost:5000";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configured base URL does not parse.
    #[error("invalid API URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// User configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL shared by both endpoints.
    pub api_url: Option<String>,

    /// `tracing` filter directive, e.g. `"debug"` or `"lawvriksh_onboard=trace"`.
    pub log_filter: Option<String>,
}

impl Config {
    /// Path of the config file (`~/.config/lawvriksh-onboard/config.toml`).
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lawvriksh-onboard").join("config.toml"))
    }

    /// Loads the config file if there is one, otherwise the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parses the config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Applies the environment value and the command-line value on top.
    ///
    /// Blank values are ignored so an exported-but-empty variable does not
    /// mask the file.
    pub fn with_overrides(mut self, env: Option<String>, cli: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        if let Some(url) = non_blank(cli).or_else(|| non_blank(env)) {
            self.api_url = Some(url);
        }
        self
    }

    /// The effective `tracing` filter.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Resolves both endpoint URLs.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        match &self.api_url {
            Some(base) => {
                let base = parse_base(base)?;
                Ok(Endpoints {
                    register: endpoint(&base, "api/register")?,
                    feedback: endpoint(&base, "api/feedback")?,
                    health: endpoint(&base, "api/health")?,
                })
            }
            None => {
                let register_base = parse_base(REGISTER_FALLBACK_BASE)?;
                Ok(Endpoints {
                    register: endpoint(&register_base, "api/register")?,
                    feedback: endpoint(&parse_base(FEEDBACK_FALLBACK_BASE)?, "api/feedback")?,
                    health: endpoint(&register_base, "api/health")?,
                })
            }
        }
    }
}

/// Fully resolved backend URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// `POST` target for registrations.
    pub register: Url,
    /// `POST` target for feedback.
    pub feedback: Url,
    /// `GET` target for the liveness probe.
    pub health: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        // The fallbacks are compile-time constants and always parse.
        Config::default()
            .endpoints()
            .expect("valid hardcoded fallback URLs")
    }
}

fn parse_base(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        value: value.to_string(),
        source,
    })?;
    // Without a trailing slash `join` would replace the last path segment.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn endpoint(base: &Url, path: &str) -> Result<Url, ConfigError> {
    base.join(path).map_err(|source| ConfigError::InvalidUrl {
        value: format!("{base}{path}"),
        source,
    })
}
