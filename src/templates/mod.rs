//! Embedded theme templates using the Tera template engine
//!
//! All templates are compiled into the binary, so a deployment is a
//! single executable plus its `_config.yml`.

use anyhow::Result;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{PostView, SummaryView};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping is off: rich-text bodies arrive pre-rendered, and
        // plain fields escape explicitly in the templates.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("index.html", include_str!("theme/index.html")),
            ("post.html", include_str!("theme/post.html")),
            (
                "partials/header.html",
                include_str!("theme/partials/header.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render the listing page
    pub fn render_index(
        &self,
        config: &SiteConfig,
        posts: &[SummaryView],
        next_page: Option<&str>,
    ) -> Result<String> {
        let mut context = self.base_context(config);
        context.insert("posts", posts);
        context.insert("next_page", &next_page);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Render the post page
    ///
    /// With no post this renders the fallback shell with the loading
    /// indicator, for uids the API has not resolved yet.
    pub fn render_post(&self, config: &SiteConfig, post: Option<&PostView>) -> Result<String> {
        let mut context = self.base_context(config);
        context.insert("loading", &post.is_none());
        if let Some(post) = post {
            context.insert("post", post);
        }
        Ok(self.tera.render("post.html", &context)?)
    }

    fn base_context(&self, config: &SiteConfig) -> Context {
        let mut context = Context::new();
        context.insert("language", &config.language);
        context.insert("site_title", &config.title);
        context.insert("page_title", &format!("Home | {}", config.title));
        context
    }
}
