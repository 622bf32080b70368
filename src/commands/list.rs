//! List the posts the site would publish

use anyhow::Result;

use crate::content::list_posts;
use crate::Site;

/// Print every discovered post, in listing order
pub fn run(site: &Site) -> Result<()> {
    let posts = list_posts(&site.posts_dir)?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {} [{}]", post.slug, post.file_name());
    }

    Ok(())
}
