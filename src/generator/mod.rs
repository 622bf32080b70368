//! Generator module - builds the static site from embedded Tera templates

use anyhow::{Context as _, Result};
use std::fs;
use tera::Context;
use walkdir::WalkDir;

use crate::content::{list_posts, render_markdown, PostRef};
use crate::templates::TemplateRenderer;
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site into the public directory.
    ///
    /// Every build starts from a fresh directory scan; nothing is cached
    /// between invocations. A failed listing fails the whole build.
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        // Static-data preparation: one listing feeds the whole build
        let posts = list_posts(&self.site.posts_dir)?;
        tracing::info!("Discovered {} posts", posts.len());

        self.generate_home_page()?;
        self.generate_posts_index(&posts)?;
        self.generate_post_pages(&posts)?;
        self.copy_static_assets()?;

        Ok(())
    }

    /// Create a context with the variables every template expects
    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.site.config);
        context.insert(
            "current_year",
            &chrono::Local::now().format("%Y").to_string(),
        );
        context
    }

    /// Generate the landing page at /
    fn generate_home_page(&self) -> Result<()> {
        let context = self.base_context();
        let html = self.renderer.render("index.html", &context)?;

        let output_path = self.site.public_dir.join("index.html");
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate the post index at /posts/, one link per discovered post.
    ///
    /// The listing is taken as-is: no sorting, filtering, or deduplication
    /// happens here, and an empty listing renders an empty list.
    fn generate_posts_index(&self, posts: &[PostRef]) -> Result<()> {
        let mut context = self.base_context();
        context.insert("posts", posts);
        let html = self.renderer.render("prose/posts.html", &context)?;

        let output_path = self.site.public_dir.join("posts").join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);

        Ok(())
    }

    /// Generate one page per post at /posts/&lt;slug&gt;/.
    ///
    /// Markdown conversion is delegated wholesale to the markdown
    /// collaborator; this step only wraps the result in the prose layout.
    fn generate_post_pages(&self, posts: &[PostRef]) -> Result<()> {
        for post in posts {
            let source_path = self.site.posts_dir.join(post.file_name());
            let markdown = fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read post source {:?}", source_path))?;
            let content = render_markdown(&markdown);

            let mut context = self.base_context();
            context.insert("slug", &post.slug);
            context.insert("content", &content);
            let html = self.renderer.render("prose/post.html", &context)?;

            let output_path = self
                .site
                .public_dir
                .join("posts")
                .join(&post.slug)
                .join("index.html");
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        Ok(())
    }

    /// Copy everything under the static directory into the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = self.site.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}
