//! Posts and the rolling feed built from them.
//!
//! Everything here works on in-memory post lists; loading and saving posts
//! lives in [`crate::store`].

mod filter;
mod post;

pub use filter::{filter_feed, sort_newest_first, unique_tags, Authorship, FeedFilter, POST_LIFETIME};
pub use post::{Author, NewPost, Post, Timestamp};

use thiserror::Error;

/// Rejected post submissions.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("sign in to post")]
    SignedOut,
    #[error("clip URL is empty")]
    EmptyUrl,
    #[error("game tag is empty")]
    EmptyTag,
}
