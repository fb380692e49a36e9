//! CLI command handlers, one per file.

mod delete;
mod feed;
mod post;
mod resolve;
mod tags;

pub use delete::run_delete;
pub use feed::run_feed;
pub use post::run_post;
pub use resolve::run_resolve;
pub use tags::run_tags;
