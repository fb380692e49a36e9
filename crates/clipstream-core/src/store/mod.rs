//! Post persistence.
//!
//! The feed only talks to [`PostStore`]. [`JsonPostStore`] keeps the `posts`
//! collection as a JSON array of documents on local disk.

mod json;

use std::path::PathBuf;

use thiserror::Error;

use crate::feed::{NewPost, Post, Timestamp};

pub use json::JsonPostStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post store I/O at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("post store {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no post with id {0}")]
    NotFound(String),
    #[error("post {0} belongs to another user")]
    NotOwner(String),
}

pub trait PostStore {
    /// All stored posts, newest first.
    fn list(&self) -> Result<Vec<Post>, StoreError>;

    /// Stores a submission, assigning its id and `created_at = now`.
    fn add(&self, post: NewPost, now: Timestamp) -> Result<Post, StoreError>;

    /// Deletes post `id` if `uid` is its author.
    fn delete(&self, id: &str, uid: Option<&str>) -> Result<(), StoreError>;
}
