//! The blog post page

use serde::Serialize;
use std::sync::Arc;
use tera::Context;

use super::partials::PORTRAIT_ASSET;
use super::{Partial, PartialContext, TemplatePartial, TemplateRenderer, POST_TEMPLATE};
use crate::config::SiteConfig;
use crate::content::Post;
use crate::error::Result;
use crate::helpers::{AssetResolver, RouteResolver, SiteUrls, TrustedHtml};

/// Stylesheet linked from the layout
pub const STYLESHEET_ASSET: &str = "css/app.css";

/// Renders a single post into a complete HTML document
///
/// Rendering is a pure function of the post and the renderer's collaborators,
/// so one renderer can be shared across threads.
pub struct PostPageRenderer {
    config: SiteConfig,
    templates: TemplateRenderer,
    routes: Arc<dyn RouteResolver>,
    assets: Arc<dyn AssetResolver>,
    nav: Box<dyn Partial>,
    sidebar: Box<dyn Partial>,
}

impl PostPageRenderer {
    /// Create a renderer whose URLs come from the site configuration
    pub fn new(config: SiteConfig) -> Result<Self> {
        let urls = Arc::new(SiteUrls::from_config(&config));
        Ok(Self {
            config,
            templates: TemplateRenderer::new()?,
            routes: urls.clone(),
            assets: urls,
            nav: Box::new(TemplatePartial::nav()),
            sidebar: Box::new(TemplatePartial::sidebar()),
        })
    }

    pub fn with_routes(mut self, routes: impl RouteResolver + 'static) -> Self {
        self.routes = Arc::new(routes);
        self
    }

    pub fn with_assets(mut self, assets: impl AssetResolver + 'static) -> Self {
        self.assets = Arc::new(assets);
        self
    }

    pub fn with_nav(mut self, nav: impl Partial + 'static) -> Self {
        self.nav = Box::new(nav);
        self
    }

    pub fn with_sidebar(mut self, sidebar: impl Partial + 'static) -> Self {
        self.sidebar = Box::new(sidebar);
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Render the page for `post`
    pub fn render(&self, post: &Post) -> Result<String> {
        let page = self.page(post)?;
        let context = Context::from_serialize(&page)?;
        let html = self.templates.render(POST_TEMPLATE, &context)?;

        tracing::debug!("Rendered post '{}' ({} bytes)", post.slug, html.len());
        Ok(html)
    }

    /// Everything the post template interpolates
    fn page<'a>(&'a self, post: &'a Post) -> Result<PostPage<'a>> {
        let partials = PartialContext {
            config: &self.config,
            routes: self.routes.as_ref(),
            assets: self.assets.as_ref(),
            templates: &self.templates,
        };

        Ok(PostPage {
            site: SiteView {
                name: self.config.name(),
                twitter: self.config.twitter_username(),
            },
            post: PostView {
                title: &post.title,
                summary: &post.summary,
                published_on: post.display_date(),
                datetime: post.source_date(),
                contents: &post.contents,
            },
            meta: SocialMeta {
                url: self.routes.route("post", &[post.slug.as_str()])?,
                image: self.assets.asset(PORTRAIT_ASSET),
                og_type: "article",
                locale: "en_US",
                twitter_card: "summary",
            },
            edit_url: self.config.source.blob_url(&post.source_stem()),
            stylesheet: self.assets.asset(STYLESHEET_ASSET),
            nav: self.nav.render(&partials)?,
            sidebar: self.sidebar.render(&partials)?,
        })
    }
}

#[derive(Debug, Serialize)]
struct PostPage<'a> {
    site: SiteView<'a>,
    post: PostView<'a>,
    meta: SocialMeta,
    edit_url: String,
    stylesheet: String,
    nav: TrustedHtml,
    sidebar: TrustedHtml,
}

#[derive(Debug, Serialize)]
struct SiteView<'a> {
    name: &'a str,
    twitter: &'a str,
}

#[derive(Debug, Serialize)]
struct PostView<'a> {
    title: &'a str,
    summary: &'a str,
    published_on: String,
    datetime: String,
    contents: &'a TrustedHtml,
}

/// Open Graph / Twitter Card values shared by both tag families
#[derive(Debug, Serialize)]
struct SocialMeta {
    /// Canonical post URL, used for og:url and twitter:url
    url: String,
    image: String,
    og_type: &'static str,
    locale: &'static str,
    twitter_card: &'static str,
}
