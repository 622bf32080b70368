//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // Directory
    pub posts_dir: String,
    pub static_dir: String,
    pub public_dir: String,

    // Writing
    pub new_post_name: String,

    // Navigation
    pub menu: Vec<MenuItem>,
}

/// A single entry in the header navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "mdxsite".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            posts_dir: "pages/posts".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            new_post_name: ":title.mdx".to_string(),

            menu: vec![
                MenuItem {
                    name: "Home".to_string(),
                    path: "/".to_string(),
                },
                MenuItem {
                    name: "Posts".to_string(),
                    path: "/posts/".to_string(),
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
