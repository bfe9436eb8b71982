//! Configuration loading and resolution
//!
//! Every setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable TOML file never stops startup; it is logged and
//! the remaining tiers apply.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::i18n::Locale;
use crate::{Error, Result};

pub const ENV_CONFIG: &str = "NAHBAH_CONFIG";
pub const ENV_API_URL: &str = "NAHBAH_API_URL";
pub const ENV_LOCALE: &str = "NAHBAH_LOCALE";
pub const ENV_PORT: &str = "NAHBAH_PORT";
pub const ENV_TIMEOUT_SECS: &str = "NAHBAH_TIMEOUT_SECS";
pub const ENV_BOOKLET_DIR: &str = "NAHBAH_BOOKLET_DIR";

/// Compiled fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub api_url: String,
    pub locale: Locale,
    pub port: u16,
    pub request_timeout: Duration,
    pub booklet_dir: PathBuf,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000/api".to_string(),
            locale: Locale::En,
            port: 5780,
            request_timeout: Duration::from_secs(10),
            booklet_dir: PathBuf::from("."),
        }
    }
}

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub api_url: Option<String>,
    pub locale: Option<String>,
    pub port: Option<u16>,
    pub request_timeout_secs: Option<u64>,
    pub booklet_dir: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    }

    /// Parse the config file if one is found, otherwise use empty settings
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            debug!("No config file found, using defaults");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable config file");
                Self::default()
            }
        }
    }
}

/// Locate the config file: explicit path, then `NAHBAH_CONFIG`, then the
/// per-user config directory (`~/.config/nahbah/config.toml` on Linux)
pub fn config_file_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|d| d.join("nahbah").join("config.toml"))
        .filter(|path| path.exists())
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub locale: Option<String>,
    pub port: Option<u16>,
    pub request_timeout_secs: Option<u64>,
    pub booklet_dir: Option<PathBuf>,
}

/// Fully resolved settings
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// Backend base URL without trailing slash
    pub api_url: String,
    pub locale: Locale,
    pub port: u16,
    pub request_timeout: Duration,
    pub booklet_dir: PathBuf,
}

impl GalleryConfig {
    /// Resolve every setting from CLI, environment, TOML and defaults
    pub fn resolve(cli: &CliOverrides, toml: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::default();

        let api_url = cli
            .api_url
            .clone()
            .or_else(|| env_value(ENV_API_URL))
            .or_else(|| toml.api_url.clone())
            .unwrap_or(defaults.api_url);

        let locale = match cli
            .locale
            .clone()
            .or_else(|| env_value(ENV_LOCALE))
            .or_else(|| toml.locale.clone())
        {
            Some(code) => code
                .parse::<Locale>()
                .map_err(|e| Error::Config(e.to_string()))?,
            None => defaults.locale,
        };

        let port = match cli.port {
            Some(port) => port,
            None => match env_value(ENV_PORT) {
                Some(raw) => parse_env(ENV_PORT, &raw)?,
                None => toml.port.unwrap_or(defaults.port),
            },
        };

        let request_timeout = match cli.request_timeout_secs {
            Some(secs) => Duration::from_secs(secs),
            None => match env_value(ENV_TIMEOUT_SECS) {
                Some(raw) => Duration::from_secs(parse_env(ENV_TIMEOUT_SECS, &raw)?),
                None => toml
                    .request_timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.request_timeout),
            },
        };

        if request_timeout.is_zero() {
            return Err(Error::Config("Request timeout must be positive".to_string()));
        }

        let booklet_dir = cli
            .booklet_dir
            .clone()
            .or_else(|| env_value(ENV_BOOKLET_DIR).map(PathBuf::from))
            .or_else(|| toml.booklet_dir.clone())
            .unwrap_or(defaults.booklet_dir);

        Ok(Self {
            api_url: normalize_api_url(&api_url)?,
            locale,
            port,
            request_timeout,
            booklet_dir,
        })
    }
}

/// Validate the backend URL scheme and strip trailing slashes
pub fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Config(format!(
            "Backend URL must start with http:// or https://: {}",
            raw
        )));
    }

    Ok(trimmed.to_string())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", name, raw)))
}
