// config.rs
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const CONFIG_PATH_ENV: &str = "PORTFOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Runtime settings, resolved as defaults < config file < environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub github_username: String,
    pub github_api_base: Url,
    pub github_repo_limit: u32,
    pub github_timeout: Duration,
    pub contact_delay: Duration,
    pub static_dir: PathBuf,
    pub content_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    addr: Option<String>,
    max_workers: Option<usize>,
    static_dir: Option<PathBuf>,
    content_path: Option<PathBuf>,
    github: GithubSection,
    contact: ContactSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GithubSection {
    username: Option<String>,
    api_base: Option<String>,
    repo_limit: Option<u32>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ContactSection {
    delay_ms: Option<u64>,
}

impl Config {
    /// Load from `PORTFOLIO_CONFIG` (or `./portfolio.toml` if present) and the
    /// process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();

        let path = match env.get(CONFIG_PATH_ENV) {
            Some(p) => Some(PathBuf::from(p)),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };

        let file_text = match &path {
            Some(p) => Some(read_config_file(p)?),
            None => None,
        };

        Self::from_sources(file_text.as_deref(), &env)
    }

    pub fn from_sources(
        file_text: Option<&str>,
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let file: FileConfig = match file_text {
            Some(text) => toml::from_str(text)?,
            None => FileConfig::default(),
        };

        let addr_raw = env_or(env, "PORTFOLIO_ADDR", file.addr)
            .unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let addr = addr_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            field: "addr".into(),
            reason: format!("{addr_raw:?} is not a socket address: {e}"),
        })?;

        let max_workers = parse_env(env, "PORTFOLIO_WORKERS")?
            .or(file.max_workers)
            .unwrap_or(8);
        validate_min("max_workers", max_workers as u64, 1)?;

        let github_username = env_or(env, "GITHUB_USERNAME", file.github.username)
            .unwrap_or_else(|| "octocat".to_string());
        validate_non_empty("github.username", &github_username)?;

        let api_base_raw = env_or(env, "GITHUB_API_BASE", file.github.api_base)
            .unwrap_or_else(|| "https://api.github.com".to_string());
        let github_api_base = validate_url("github.api_base", &api_base_raw)?;

        let github_repo_limit = parse_env(env, "GITHUB_REPO_LIMIT")?
            .or(file.github.repo_limit)
            .unwrap_or(6);
        validate_range("github.repo_limit", github_repo_limit, 1, 100)?;

        let timeout_secs = file.github.timeout_secs.unwrap_or(10);
        validate_min("github.timeout_secs", timeout_secs, 1)?;

        let delay_ms = parse_env(env, "CONTACT_DELAY_MS")?
            .or(file.contact.delay_ms)
            .unwrap_or(1000);

        let static_dir = env
            .get("PORTFOLIO_STATIC_DIR")
            .map(PathBuf::from)
            .or(file.static_dir)
            .unwrap_or_else(|| PathBuf::from("static"));

        let content_path = env
            .get("PORTFOLIO_CONTENT")
            .map(PathBuf::from)
            .or(file.content_path);

        Ok(Self {
            addr,
            max_workers,
            github_username: github_username.trim().to_string(),
            github_api_base,
            github_repo_limit,
            github_timeout: Duration::from_secs(timeout_secs),
            contact_delay: Duration::from_millis(delay_ms),
            static_dir,
            content_path,
        })
    }

    /// Public profile page, used as the fallback link when the API is down.
    pub fn github_profile_url(&self) -> String {
        format!("https://github.com/{}", self.github_username)
    }
}

fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn env_or(env: &HashMap<String, String>, key: &str, file_value: Option<String>) -> Option<String> {
    env.get(key)
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .or(file_value)
}

fn parse_env<T>(env: &HashMap<String, String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| ConfigError::Invalid {
            field: key.to_string(),
            reason: format!("{raw:?}: {e}"),
        }),
        None => Ok(None),
    }
}

fn validate_url(field: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        field: field.to_string(),
        reason: format!("Invalid URL format: {e}"),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::Invalid {
            field: field.to_string(),
            reason: format!("Unsupported URL scheme: {scheme}"),
        }),
    }
}

fn validate_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: field.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn validate_min(field: &str, value: u64, min: u64) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::Invalid {
            field: field.to_string(),
            reason: format!("Value must be at least {min}"),
        });
    }
    Ok(())
}

fn validate_range(field: &str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::Invalid {
            field: field.to_string(),
            reason: format!("Value must be between {min} and {max}"),
        });
    }
    Ok(())
}
