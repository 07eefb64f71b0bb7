use std::str::FromStr;

use dioxus_logger::tracing::Level;

use crate::error::config::ConfigError;

/// Base URL of the API gateway used when `API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8003/api";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL every API path is appended to, without a trailing slash
    pub api_base_url: String,
    /// Empty the tourist's selected destinations once a trip request is accepted by the API
    pub clear_selection_after_submit: bool,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            clear_selection_after_submit: true,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Browser builds have no process environment, so values captured at build time
    /// with `option_env!` are used as a fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok().or_else(|| build_time_var(var)))
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup("API_BASE_URL") {
            Some(url) => parse_base_url(&url)?,
            None => defaults.api_base_url,
        };

        let clear_selection_after_submit = match lookup("CLEAR_SELECTION_AFTER_SUBMIT") {
            Some(value) => parse_bool("CLEAR_SELECTION_AFTER_SUBMIT", &value)?,
            None => defaults.clear_selection_after_submit,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => Level::from_str(value.trim()).map_err(|e| {
                ConfigError::InvalidEnvValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: e.to_string(),
                }
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            api_base_url,
            clear_selection_after_submit,
            log_level,
        })
    }
}

fn build_time_var(var: &str) -> Option<String> {
    let value = match var {
        "API_BASE_URL" => option_env!("API_BASE_URL"),
        "CLEAR_SELECTION_AFTER_SUBMIT" => option_env!("CLEAR_SELECTION_AFTER_SUBMIT"),
        "LOG_LEVEL" => option_env!("LOG_LEVEL"),
        _ => None,
    };

    value.map(str::to_string)
}

fn parse_base_url(value: &str) -> Result<String, ConfigError> {
    let url = value.trim().trim_end_matches('/');

    if url.is_empty() {
        return Err(ConfigError::MissingEnvVar("API_BASE_URL".to_string()));
    }

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: "API_BASE_URL".to_string(),
            reason: format!("{:?} must start with http:// or https://", url),
        });
    }

    Ok(url.to_string())
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("{:?} is not a boolean", other),
        }),
    }
}
