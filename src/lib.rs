//! spacetraveling-rs: a server-rendered blog front-end
//!
//! Pages are rendered with embedded Tera templates from documents
//! fetched out of a headless content API.

pub mod cms;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use cms::CmsClient;
use config::SiteConfig;
use server::ServerState;
use templates::TemplateRenderer;

/// The main application
pub struct Blog {
    /// Site configuration
    pub config: SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new instance from a directory containing `_config.yml`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            SiteConfig::load(&config_path)?
        } else {
            let mut config = SiteConfig::default();
            config.apply_env();
            config
        };

        Ok(Self { config, base_dir })
    }

    /// Build the shared server state: CMS client plus template renderer
    pub fn state(&self) -> Result<Arc<ServerState>> {
        let cms = CmsClient::new(&self.config.api.url, self.config.api.access_token.clone());
        let renderer = TemplateRenderer::new()?;
        Ok(Arc::new(ServerState {
            config: self.config.clone(),
            cms,
            renderer,
        }))
    }

    /// Start the HTTP server
    pub async fn serve(&self, ip: &str, port: u16) -> Result<()> {
        server::start(self.state()?, ip, port).await
    }
}
