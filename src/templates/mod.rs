//! Built-in site templates using the Tera template engine
//!
//! Every template is embedded directly in the binary, so the generated
//! site never depends on an external theme directory.

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer with all site templates loaded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with the embedded templates registered
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Disable autoescaping: the templates emit HTML, and post bodies
        // arrive already rendered to HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("layout.html")),
            ("index.html", include_str!("index.html")),
            ("prose/posts.html", include_str!("prose/posts.html")),
            ("prose/post.html", include_str!("prose/post.html")),
            ("partials/nav.html", include_str!("partials/nav.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::PostRef;

    fn base_context() -> Context {
        let mut context = Context::new();
        context.insert("config", &SiteConfig::default());
        context.insert("current_year", "2026");
        context
    }

    #[test]
    fn test_posts_index_links_every_slug_in_order() {
        let renderer = TemplateRenderer::new().unwrap();
        let posts = vec![
            PostRef::from_file_name("hello-world.mdx").unwrap(),
            PostRef::from_file_name("second-post.mdx").unwrap(),
        ];

        let mut context = base_context();
        context.insert("posts", &posts);
        let html = renderer.render("prose/posts.html", &context).unwrap();

        // Exactly one link per slug, target /posts/<slug>, label verbatim
        assert_eq!(
            html.matches(r#"<a href="/posts/hello-world">hello-world</a>"#)
                .count(),
            1
        );
        assert_eq!(
            html.matches(r#"<a href="/posts/second-post">second-post</a>"#)
                .count(),
            1
        );
        let first = html.find("/posts/hello-world").unwrap();
        let second = html.find("/posts/second-post").unwrap();
        assert!(first < second, "listing order must be preserved");
    }

    #[test]
    fn test_posts_index_with_no_posts_renders_empty_list() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert("posts", &Vec::<PostRef>::new());

        let html = renderer.render("prose/posts.html", &context).unwrap();
        assert!(!html.contains("<li>"));
        assert!(html.contains("post-list"));
    }

    #[test]
    fn test_post_page_wraps_content_in_prose_container() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = base_context();
        context.insert("slug", "hello-world");
        context.insert("content", "<h1>Hello</h1>");

        let html = renderer.render("prose/post.html", &context).unwrap();
        assert!(html.contains(r#"<article class="prose">"#));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<title>hello-world - mdxsite</title>"));
    }

    #[test]
    fn test_layout_carries_nav_and_language() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render("index.html", &base_context()).unwrap();

        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/posts/">Posts</a>"#));
        assert!(html.contains("&copy; 2026"));
    }
}
