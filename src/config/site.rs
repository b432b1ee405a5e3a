//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured access token
pub const TOKEN_ENV: &str = "SPACETRAVELING_API_TOKEN";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Content API
    pub api: ApiConfig,

    // Server
    pub server: ServerConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "spacetraveling.".to_string(),
            language: "pt-BR".to_string(),
            api: ApiConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file, applying environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut config: SiteConfig = serde_yaml::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Override credentials from the environment
    ///
    /// Keeps the token out of `_config.yml` on deployments that prefer
    /// environment-based secrets.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                self.api.access_token = Some(token);
            }
        }
    }
}

/// Content API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base endpoint of the headless CMS
    pub url: String,

    /// Access token, when the repository is private
    pub access_token: Option<String>,

    /// Page size for the listing query
    pub page_size: usize,

    /// Page size when enumerating known post uids
    pub paths_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "https://spacetraveling.cdn.example.com/api/v2".to_string(),
            access_token: None,
            page_size: 2,
            paths_page_size: 20,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "spacetraveling.");
        assert_eq!(config.language, "pt-BR");
        assert_eq!(config.api.page_size, 2);
        assert_eq!(config.api.paths_page_size, 20);
        assert_eq!(config.server.port, 4000);
        assert!(config.api.access_token.is_none());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Travel Blog
api:
  url: https://my-repo.cdn.example.com/api/v2
  page_size: 5
server:
  port: 8080
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Travel Blog");
        assert_eq!(config.api.url, "https://my-repo.cdn.example.com/api/v2");
        assert_eq!(config.api.page_size, 5);
        // Unspecified fields keep their defaults
        assert_eq!(config.api.paths_page_size, 20);
        assert_eq!(config.server.ip, "localhost");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title: From File").unwrap();
        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "From File");
    }

    #[test]
    fn test_env_token_override() {
        let mut config = SiteConfig::default();
        std::env::set_var(TOKEN_ENV, "from-env");
        config.apply_env();
        std::env::remove_var(TOKEN_ENV);
        assert_eq!(config.api.access_token.as_deref(), Some("from-env"));
    }
}
