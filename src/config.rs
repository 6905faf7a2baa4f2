use crate::advisor::SectionKeywords;
use crate::analyzer::MarketCatalog;
use serde::Deserialize;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    pub api_url: String,
    /// Usually left unset here and supplied via the OPENAI_API_KEY env var.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout_seconds: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_url: crate::advisor::openai::DEFAULT_API_URL.to_string(),
            api_key: None,
            model: "gpt-4".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAiConfig,
    pub advisory_keywords: SectionKeywords,
    pub market: MarketCatalog,
}

impl AppConfig {
    /// API key from the config file, or the OPENAI_API_KEY environment
    /// variable when the file leaves it unset. None means the advisory
    /// backend will refuse calls and every analysis falls back.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.openai
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|key| !key.is_empty())
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_full_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.openai.model, "gpt-4");
        assert_eq!(config.openai.timeout_seconds, 30);
        assert!(config.market.categories.contains_key("Electronics"));
    }

    #[test]
    fn partial_config_overrides_selected_fields() {
        let config: AppConfig = serde_json::from_str(
            r#"{"server": {"port": 9100}, "openai": {"model": "gpt-4o-mini"}}"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.openai.model, "gpt-4o-mini");
    }

    #[test]
    fn market_catalog_is_injectable_from_config() {
        let config: AppConfig = serde_json::from_str(
            r#"{"market": {"categories": {"Pet Supplies": {
                "demand_coefficient": 0.9,
                "price_bands": {"low": 5.0, "medium": 15.0, "high": 40.0}
            }}}}"#,
        )
        .unwrap();
        let profile = config.market.categories.get("Pet Supplies").unwrap();
        assert_eq!(profile.demand_coefficient, 0.9);
        // the default entry survives even when categories are replaced
        assert_eq!(config.market.default.demand_coefficient, 0.5);
    }
}
