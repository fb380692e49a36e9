//! File-backed post collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{PostStore, StoreError};
use crate::feed::{sort_newest_first, NewPost, Post, Timestamp};

/// Posts stored as a pretty-printed JSON array. A missing file is an empty
/// collection.
#[derive(Debug, Clone)]
pub struct JsonPostStore {
    path: PathBuf,
}

impl JsonPostStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Post>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Writes via a sibling temp file and rename so a crash never leaves a
    /// half-written collection.
    fn write_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(posts).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl PostStore for JsonPostStore {
    fn list(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.read_all()?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }

    fn add(&self, post: NewPost, now: Timestamp) -> Result<Post, StoreError> {
        let mut posts = self.read_all()?;
        let post = post.into_post(Uuid::new_v4().to_string(), now);
        posts.push(post.clone());
        self.write_all(&posts)?;
        tracing::info!(id = ?post.id, tag = %post.tag, "stored post");
        Ok(post)
    }

    fn delete(&self, id: &str, uid: Option<&str>) -> Result<(), StoreError> {
        let mut posts = self.read_all()?;
        let idx = posts
            .iter()
            .position(|p| p.id.as_deref() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if !posts[idx].is_owned_by(uid) {
            return Err(StoreError::NotOwner(id.to_string()));
        }
        posts.remove(idx);
        self.write_all(&posts)?;
        tracing::info!(id, "deleted post");
        Ok(())
    }
}
