use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

/// Application configuration, loaded from config.toml with env overrides
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub delay: DelayConfig,
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
            port: 5000,
        }
    }
}

/// Artificial processing delays, demo flavor only
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    pub enabled: bool,
    pub insights_min_ms: u64,
    pub insights_max_ms: u64,
    pub headline_min_ms: u64,
    pub headline_max_ms: u64,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            insights_min_ms: 1000,
            insights_max_ms: 1500,
            headline_min_ms: 500,
            headline_max_ms: 800,
        }
    }
}

impl AppConfig {
    /// Load configuration: config.toml if present, defaults otherwise.
    /// The PORT environment variable overrides the configured port.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_PATH).exists() {
            let raw = std::fs::read_to_string(CONFIG_PATH)
                .with_context(|| format!("Failed to read {}", CONFIG_PATH))?;
            toml::from_str(&raw)
                .with_context(|| format!("Failed to parse {}", CONFIG_PATH))?
        } else {
            Self::default()
        };

        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .context("PORT must be a valid port number")?;
        }

        Ok(config)
    }
}
