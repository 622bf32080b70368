//! Post reference model

use serde::Serialize;

/// File name suffix that marks a post source file
pub const POST_EXTENSION: &str = ".mdx";

/// A reference to one discovered post
///
/// Carries only the slug: the source file name with its `.mdx` suffix
/// removed. The slug doubles as the URL segment and the visible label of
/// the post, so it is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRef {
    /// URL segment and display label
    pub slug: String,
}

impl PostRef {
    /// Build a reference from a directory entry name.
    ///
    /// Returns `None` unless the name ends with the literal `.mdx` suffix.
    /// Only the trailing occurrence of the suffix is stripped; the rest of
    /// the name is taken verbatim.
    pub fn from_file_name(name: &str) -> Option<Self> {
        name.strip_suffix(POST_EXTENSION).map(|slug| Self {
            slug: slug.to_string(),
        })
    }

    /// Source file name for this post, including the extension
    pub fn file_name(&self) -> String {
        format!("{}{}", self.slug, POST_EXTENSION)
    }
}
