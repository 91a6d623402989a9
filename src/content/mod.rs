//! Content module - the markdown pipeline from files to posts

mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod store;

pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, LoaderOptions};
pub use markdown::MarkdownRenderer;
pub use post::{Post, PostMetadata};
pub use store::ContentStore;
