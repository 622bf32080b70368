//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new post file in the posts directory.
///
/// The file name comes from the configured `new_post_name` pattern unless
/// an explicit path is given; the seed content is a bare heading, since
/// posts carry no frontmatter.
pub fn create_post(site: &Site, title: &str, path: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();

    let filename = if let Some(p) = path {
        format!("{}.mdx", p)
    } else {
        let post_name = &site.config.new_post_name;
        let slug = slug::slugify(title);

        post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
    };

    let file_path = site.posts_dir.join(&filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, format!("# {}\n", title))?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_slugifies_the_title() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_post(&site, "Hello World", None).unwrap();

        let created = site.posts_dir.join("hello-world.mdx");
        assert!(created.exists());
        assert_eq!(fs::read_to_string(created).unwrap(), "# Hello World\n");
    }

    #[test]
    fn test_create_post_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_post(&site, "Hello World", None).unwrap();
        assert!(create_post(&site, "Hello World", None).is_err());
    }

    #[test]
    fn test_create_post_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        create_post(&site, "Notes", Some("2026/notes")).unwrap();
        assert!(site.posts_dir.join("2026/notes.mdx").exists());
    }
}
