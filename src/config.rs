//! Configuration - YAML file in the config directory plus environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    APP_NAME, DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_NEWS_URL, DEFAULT_PAGE_SIZE,
    DEFAULT_TIMEOUT_SECS,
};

/// How a successful call with an empty collection (`[]` or `{}`) is treated.
///
/// A `null` body and a failed call are always failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResponsePolicy {
    #[default]
    Succeed,
    Fail,
}

impl std::str::FromStr for EmptyResponsePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "succeed" | "success" => Ok(EmptyResponsePolicy::Succeed),
            "fail" | "failure" => Ok(EmptyResponsePolicy::Fail),
            other => anyhow::bail!("unknown empty response policy '{}'", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub news_url: String,
    pub news_api_key: Option<String>,
    /// Token placed in the authentication slice at startup
    pub auth_token: Option<String>,
    pub request_timeout_secs: u64,
    pub empty_response: EmptyResponsePolicy,
    /// Initial default query parameters for filtered event listings
    pub default_params: Map<String, Value>,
    /// Query sent to the news provider for the ticker
    pub news_query: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        let mut default_params = Map::new();
        default_params.insert("category".into(), Value::from("all"));
        default_params.insert("page".into(), Value::from(1));
        default_params.insert("count".into(), Value::from(DEFAULT_PAGE_SIZE));
        default_params.insert("sortBy".into(), Value::from("name"));

        Config {
            api_url: String::from(DEFAULT_API_URL),
            news_url: String::from(DEFAULT_NEWS_URL),
            news_api_key: None,
            auth_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            empty_response: EmptyResponsePolicy::default(),
            default_params,
            news_query: String::from("prediction markets"),
            log_file: String::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Default config file location: `~/.wagerdesk/config.yaml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!(".{}", APP_NAME))
            .join("config.yaml")
    }

    /// Load from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Apply `WAGERDESK_*` overrides from `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("WAGERDESK_API_URL") {
            self.api_url = url;
        }
        if let Some(url) = lookup("WAGERDESK_NEWS_URL") {
            self.news_url = url;
        }
        if let Some(key) = lookup("WAGERDESK_NEWS_API_KEY") {
            self.news_api_key = Some(key);
        }
        if let Some(token) = lookup("WAGERDESK_TOKEN") {
            self.auth_token = Some(token);
        }
        if let Some(policy) = lookup("WAGERDESK_EMPTY_RESPONSE") {
            self.empty_response = policy.parse().context("WAGERDESK_EMPTY_RESPONSE")?;
        }
        Ok(())
    }
}
