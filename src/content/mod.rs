//! Content module - posts and how they are read from disk

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use post::Post;
