//! Post discovery - derives post references from the posts directory

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::PostRef;

/// List the posts found in `posts_dir`.
///
/// The scan is shallow: one [`PostRef`] per `.mdx` file directly inside the
/// directory, in whatever order the directory enumeration yields them.
/// Nothing is sorted, deduplicated, or cached; every call reads the
/// directory afresh. Entries that are not regular files and file names that
/// are not valid UTF-8 are skipped.
///
/// A missing or unreadable directory is an error. The caller decides what a
/// failed listing means; typically it fails the whole build.
pub fn list_posts(posts_dir: &Path) -> Result<Vec<PostRef>> {
    let entries = fs::read_dir(posts_dir)
        .with_context(|| format!("failed to read posts directory {:?}", posts_dir))?;

    let mut posts = Vec::new();

    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(post) = file_name.to_str().and_then(PostRef::from_file_name) {
            posts.push(post);
        }
    }

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"# test\n").unwrap();
    }

    #[test]
    fn test_lists_every_mdx_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "one.mdx");
        touch(dir.path(), "two.mdx");
        touch(dir.path(), "three.mdx");

        let mut slugs: Vec<String> = list_posts(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        slugs.sort();
        assert_eq!(slugs, vec!["one", "three", "two"]);
    }

    #[test]
    fn test_skips_files_without_the_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "hello-world.mdx");
        touch(dir.path(), "draft.txt");
        touch(dir.path(), "second-post.mdx");
        touch(dir.path(), "photo.png");

        let mut slugs: Vec<String> = list_posts(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.slug)
            .collect();
        slugs.sort();
        assert_eq!(slugs, vec!["hello-world", "second-post"]);
    }

    #[test]
    fn test_skips_directories_even_when_named_like_posts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("archive.mdx")).unwrap();
        touch(dir.path(), "real-post.mdx");

        let posts = list_posts(dir.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "real-post");
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let posts = list_posts(dir.path()).unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        assert!(list_posts(&missing).is_err());
    }

    #[test]
    fn test_repeated_scans_agree_on_an_unchanged_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "alpha.mdx");
        touch(dir.path(), "beta.mdx");
        touch(dir.path(), "gamma.mdx");

        let first = list_posts(dir.path()).unwrap();
        let second = list_posts(dir.path()).unwrap();
        assert_eq!(first, second);
    }
}
