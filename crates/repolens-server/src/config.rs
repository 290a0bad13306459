// File: src/config.rs
// Purpose: Configuration parsing from repolens.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoutingConfig {
    /// Base path the site is deployed under (e.g., "/lens")
    #[serde(default)]
    pub base_path: Option<String>,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // A missing or empty file means defaults, not an error
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./repolens.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("repolens.toml")
    }

    /// Bind address derived from host and port
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The deployment base path.
    ///
    /// `BASE_URL` from the environment takes precedence over
    /// `routing.base_path` from the file.
    pub fn base_path(&self) -> Option<String> {
        resolve_base_path(
            std::env::var("BASE_URL").ok(),
            self.routing.base_path.clone(),
        )
    }
}

fn resolve_base_path(env: Option<String>, file: Option<String>) -> Option<String> {
    env.filter(|value| !value.trim().is_empty()).or(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.base_path, None);
        assert_eq!(config.addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.routing.base_path, None);
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            [server]
            port = 8080

            [routing]
            base_path = "/lens"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.routing.base_path.as_deref(), Some("/lens"));
    }

    #[test]
    fn test_base_path_precedence() {
        // Environment value wins
        assert_eq!(
            resolve_base_path(Some("/env".to_string()), Some("/file".to_string())),
            Some("/env".to_string())
        );
        // Blank environment value falls through to the file
        assert_eq!(
            resolve_base_path(Some("  ".to_string()), Some("/file".to_string())),
            Some("/file".to_string())
        );
        assert_eq!(resolve_base_path(None, None), None);
    }
}
