//! post-page: renders blog post pages
//!
//! A post (title, summary, slug, date and pre-rendered HTML body) and the
//! site configuration go in, a complete HTML document with Open Graph and
//! Twitter Card metadata comes out. Routes, assets and the shared partials
//! are injected into the renderer rather than looked up globally.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::Post;
pub use error::RenderError;
pub use helpers::TrustedHtml;
pub use templates::PostPageRenderer;

/// Config files looked up in the site directory, in order
pub const CONFIG_FILES: [&str; 2] = ["_config.yml", "_config.toml"];

/// A site rooted at a directory
pub struct Blog {
    /// Base directory
    pub base_dir: PathBuf,
    /// Post page renderer built from the site configuration
    pub renderer: PostPageRenderer,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        let config = match CONFIG_FILES
            .iter()
            .map(|name| base_dir.join(name))
            .find(|path| path.exists())
        {
            Some(path) => config::SiteConfig::load(&path)?,
            None => {
                tracing::debug!("No config in {:?}, using defaults", base_dir);
                config::SiteConfig::default()
            }
        };

        Ok(Self {
            base_dir,
            renderer: PostPageRenderer::new(config)?,
        })
    }

    /// Site configuration
    pub fn config(&self) -> &config::SiteConfig {
        self.renderer.config()
    }

    /// Render a post page
    pub fn render_post(&self, post: &Post) -> Result<String> {
        Ok(self.renderer.render(post)?)
    }

    /// Render posts to stdout or to `<output>/<slug>/index.html`
    pub fn render(&self, paths: &[PathBuf], output: Option<&Path>) -> Result<usize> {
        commands::render::run(self, paths, output)
    }
}
