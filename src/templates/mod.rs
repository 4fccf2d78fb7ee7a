//! Built-in site templates using the Tera template engine
//!
//! The layout, the post page and the shared partials are embedded directly
//! in the binary. Autoescaping is on for every `.html` template; values that
//! must be written raw travel as [`TrustedHtml`](crate::helpers::TrustedHtml).

mod partials;
mod post;

pub use partials::{Partial, PartialContext, TemplatePartial};
pub use post::PostPageRenderer;

use tera::{Context, Tera};

use crate::error::Result;
use crate::helpers::html_escape;

pub const LAYOUT_TEMPLATE: &str = "layout.html";
pub const POST_TEMPLATE: &str = "post.html";
pub const NAV_TEMPLATE: &str = "partials/nav.html";
pub const SIDEBAR_TEMPLATE: &str = "partials/sidebar.html";

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all site templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Escape every .html template. The default escaper also rewrites '/',
        // which would mangle every URL placed in an attribute.
        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(html_escape);

        tera.add_raw_templates(vec![
            (LAYOUT_TEMPLATE, include_str!("site/layout.html")),
            (POST_TEMPLATE, include_str!("site/post.html")),
            // Partials
            (NAV_TEMPLATE, include_str!("site/partials/nav.html")),
            (SIDEBAR_TEMPLATE, include_str!("site/partials/sidebar.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Check if a template exists
    #[cfg(test)]
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_registered() {
        let renderer = TemplateRenderer::new().unwrap();
        for name in [LAYOUT_TEMPLATE, POST_TEMPLATE, NAV_TEMPLATE, SIDEBAR_TEMPLATE] {
            assert!(renderer.has_template(name), "missing {}", name);
        }
        assert!(!renderer.has_template("index.html"));
    }

    #[test]
    fn test_autoescape_uses_html_escape() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("site_name", "Tom & <Jerry>");
        ctx.insert("home_url", "https://example.com/");
        ctx.insert("twitter_url", "");
        ctx.insert("twitter_username", "");

        let html = renderer.render(NAV_TEMPLATE, &ctx).unwrap();
        assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(html.contains(r#"href="https://example.com/""#));
    }

    #[test]
    fn test_only_trusted_fields_are_marked_safe() {
        let post = include_str!("site/post.html");
        let safe: Vec<_> = post
            .lines()
            .filter(|l| l.contains("| safe"))
            .map(str::trim)
            .collect();
        assert_eq!(
            safe,
            vec![
                "{{ nav | safe }}",
                "{{ sidebar | safe }}",
                "{{ post.contents | safe }}",
            ]
        );

        for partial in [
            include_str!("site/layout.html"),
            include_str!("site/partials/nav.html"),
            include_str!("site/partials/sidebar.html"),
        ] {
            assert!(!partial.contains("safe"));
        }
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let renderer = TemplateRenderer::new().unwrap();
        assert!(renderer.render(NAV_TEMPLATE, &Context::new()).is_err());
    }
}
