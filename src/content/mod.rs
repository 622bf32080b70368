//! Content module - post discovery and markdown delegation

pub mod lister;
mod markdown;
mod post;

pub use lister::list_posts;
pub use markdown::render_markdown;
pub use post::{PostRef, POST_EXTENSION};
