//! Configuration module for the item checker.
//!
//! Loads configuration from built-in defaults, optional config files and
//! environment variables.

use config::builder::DefaultState;
use config::{Config as ConfigLoader, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Default OpenRouter API root.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub limits: LimitsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream LLM provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenRouter API key. Empty when not configured.
    #[serde(default)]
    pub openrouter_api_key: String,
    pub base_url: String,
    pub model: String,
    /// Time budget for the whole upstream call.
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Sent as `X-Title` for OpenRouter app attribution.
    pub app_title: String,
    /// Sent as `HTTP-Referer` when set.
    #[serde(default)]
    pub app_url: Option<String>,
}

impl LlmConfig {
    pub fn is_configured(&self) -> bool {
        !self.openrouter_api_key.trim().is_empty()
    }
}

/// Request validation limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted item name, in characters, after trimming.
    pub max_item_chars: usize,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. `PORT` and `OPENROUTER_API_KEY`
    /// 2. Environment variables (ITEM_CHECKER__*)
    /// 3. config/local.yaml (if exists)
    /// 4. config/default.yaml (if exists)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            Self::environment(),
            std::env::var("PORT").ok(),
            std::env::var("OPENROUTER_API_KEY").ok(),
        )
    }

    fn load_from(
        environment: Environment,
        port: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment)
            .set_override_option("server.port", port)?
            .set_override_option("llm.openrouter_api_key", api_key)?
            .build()?;

        config.try_deserialize()
    }

    /// The `ITEM_CHECKER__SECTION__KEY` environment layer.
    fn environment() -> Environment {
        Environment::with_prefix("ITEM_CHECKER")
            .separator("__")
            .try_parsing(true)
    }

    /// Builder seeded with the built-in defaults.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("llm.openrouter_api_key", "")?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("llm.model", "anthropic/claude-3.5-sonnet")?
            .set_default("llm.timeout_secs", 30_i64)?
            .set_default("llm.max_tokens", 500_i64)?
            .set_default("llm.temperature", 0.1_f64)?
            .set_default("llm.app_title", "TSA Item Checker")?
            .set_default("limits.max_item_chars", 200_i64)
    }
}
