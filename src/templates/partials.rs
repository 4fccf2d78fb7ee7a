//! Shared page fragments (navigation, sidebar)

use tera::Context;

use super::{TemplateRenderer, NAV_TEMPLATE, SIDEBAR_TEMPLATE};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::helpers::{AssetResolver, RouteResolver, TrustedHtml};

/// Portrait shown in the sidebar and used as the social preview image
pub const PORTRAIT_ASSET: &str = "media/me.jpg";

/// What a partial can see while the page around it is rendered
pub struct PartialContext<'a> {
    pub config: &'a SiteConfig,
    pub routes: &'a dyn RouteResolver,
    pub assets: &'a dyn AssetResolver,
    pub templates: &'a TemplateRenderer,
}

/// A fragment included into a page
///
/// The output is written into the page unescaped, so implementations are
/// responsible for escaping whatever they interpolate.
pub trait Partial: Send + Sync {
    fn render(&self, ctx: &PartialContext<'_>) -> Result<TrustedHtml>;
}

impl<F> Partial for F
where
    F: Fn(&PartialContext<'_>) -> Result<TrustedHtml> + Send + Sync,
{
    fn render(&self, ctx: &PartialContext<'_>) -> Result<TrustedHtml> {
        self(ctx)
    }
}

/// A partial backed by one of the embedded templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplatePartial {
    template: &'static str,
}

impl TemplatePartial {
    pub fn nav() -> Self {
        Self {
            template: NAV_TEMPLATE,
        }
    }

    pub fn sidebar() -> Self {
        Self {
            template: SIDEBAR_TEMPLATE,
        }
    }
}

impl Partial for TemplatePartial {
    fn render(&self, ctx: &PartialContext<'_>) -> Result<TrustedHtml> {
        let username = ctx.config.twitter_username();

        let mut tera_ctx = Context::new();
        tera_ctx.insert("site_name", ctx.config.name());
        tera_ctx.insert("home_url", &ctx.routes.route("home", &[])?);
        tera_ctx.insert("portrait_url", &ctx.assets.asset(PORTRAIT_ASSET));
        tera_ctx.insert("twitter_username", username);
        tera_ctx.insert("twitter_url", &twitter_profile_url(username));

        // Autoescaped by the template engine
        let html = ctx.templates.render(self.template, &tera_ctx)?;
        Ok(TrustedHtml::new(html))
    }
}

/// Profile link for a Twitter handle, empty when no handle is configured
pub fn twitter_profile_url(username: &str) -> String {
    let handle = username.trim().trim_start_matches('@');
    if handle.is_empty() {
        String::new()
    } else {
        format!("https://twitter.com/{}", handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::SiteUrls;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.info.name = "Jane Doe".to_string();
        config.info.social.twitter.username = "@jane".to_string();
        config
    }

    #[test]
    fn test_twitter_profile_url() {
        assert_eq!(twitter_profile_url("@jane"), "https://twitter.com/jane");
        assert_eq!(twitter_profile_url("jane"), "https://twitter.com/jane");
        assert_eq!(twitter_profile_url(" "), "");
    }

    #[test]
    fn test_sidebar_partial() {
        let config = test_config();
        let urls = SiteUrls::from_config(&config);
        let templates = TemplateRenderer::new().unwrap();
        let ctx = PartialContext {
            config: &config,
            routes: &urls,
            assets: &urls,
            templates: &templates,
        };

        let html = TemplatePartial::sidebar().render(&ctx).unwrap();
        assert!(html.as_str().contains("<aside"));
        assert!(html.as_str().contains(r#"src="https://example.com/media/me.jpg""#));
        assert!(html.as_str().contains(r#"href="https://twitter.com/jane""#));
        assert!(html.as_str().contains("Jane Doe"));
    }

    #[test]
    fn test_nav_partial_without_twitter() {
        let mut config = test_config();
        config.info.social.twitter.username = String::new();
        let urls = SiteUrls::from_config(&config);
        let templates = TemplateRenderer::new().unwrap();
        let ctx = PartialContext {
            config: &config,
            routes: &urls,
            assets: &urls,
            templates: &templates,
        };

        let html = TemplatePartial::nav().render(&ctx).unwrap();
        assert!(html.as_str().contains(r#"href="https://example.com/""#));
        assert!(!html.as_str().contains("twitter.com"));
    }

    #[test]
    fn test_closure_partial() {
        let config = test_config();
        let urls = SiteUrls::from_config(&config);
        let templates = TemplateRenderer::new().unwrap();
        let ctx = PartialContext {
            config: &config,
            routes: &urls,
            assets: &urls,
            templates: &templates,
        };

        let partial = |ctx: &PartialContext<'_>| -> Result<TrustedHtml> {
            Ok(TrustedHtml::from_text(ctx.config.name()))
        };
        assert_eq!(partial.render(&ctx).unwrap().as_str(), "Jane Doe");
    }
}
