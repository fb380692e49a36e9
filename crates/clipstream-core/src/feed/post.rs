//! Post documents as stored in the `posts` collection.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::FeedError;

/// Server timestamp in the document store's `{ seconds, nanoseconds }` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    #[serde(default)]
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        Self {
            seconds: since_epoch.as_secs() as i64,
            nanoseconds: since_epoch.subsec_nanos(),
        }
    }

    pub fn from_secs(seconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds: 0,
        }
    }

    /// Milliseconds since the epoch, widened so any stored value fits.
    pub fn as_millis(&self) -> i128 {
        i128::from(self.seconds) * 1000 + i128::from(self.nanoseconds / 1_000_000)
    }
}

/// Signed-in user submitting or viewing posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub uid: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl Author {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            photo_url: None,
        }
    }
}

/// A clip post. `id` is assigned by the store and absent before insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    pub tag: String,
    pub created_at: Timestamp,
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl Post {
    /// Only the author may delete a post; anonymous posts have no owner.
    pub fn is_owned_by(&self, uid: Option<&str>) -> bool {
        matches!((self.uid.as_deref(), uid), (Some(owner), Some(viewer)) if owner == viewer)
    }
}

/// A validated submission, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub url: String,
    pub tag: String,
    pub author: Author,
}

impl NewPost {
    /// Validates a submission: both fields must be non-blank and the user
    /// must be signed in.
    pub fn new(url: &str, tag: &str, author: Option<&Author>) -> Result<Self, FeedError> {
        let author = author.ok_or(FeedError::SignedOut)?;
        let url = url.trim();
        if url.is_empty() {
            return Err(FeedError::EmptyUrl);
        }
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(FeedError::EmptyTag);
        }
        Ok(Self {
            url: url.to_string(),
            tag: tag.to_string(),
            author: author.clone(),
        })
    }

    pub fn into_post(self, id: String, created_at: Timestamp) -> Post {
        Post {
            id: Some(id),
            url: self.url,
            tag: self.tag,
            created_at,
            uid: Some(self.author.uid),
            display_name: self.author.display_name,
            photo_url: self.author.photo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_document_field_names() {
        let post = Post {
            id: None,
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            tag: "#VALORANT".to_string(),
            created_at: Timestamp {
                seconds: 1_700_000_000,
                nanoseconds: 5,
            },
            uid: Some("u1".to_string()),
            display_name: Some("Ace".to_string()),
            photo_url: None,
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["createdAt"]["seconds"], 1_700_000_000);
        assert_eq!(json["displayName"], "Ace");
        assert!(json.get("photoURL").unwrap().is_null());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn post_document_missing_optional_fields() {
        let json = r##"{"url":"https://medal.tv/clips/a","tag":"#apex","createdAt":{"seconds":10}}"##;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.created_at, Timestamp::from_secs(10));
        assert!(post.uid.is_none());
        assert!(post.id.is_none());
    }

    #[test]
    fn new_post_validation() {
        let author = Author::new("u1");
        assert!(matches!(
            NewPost::new("https://x", "#tag", None),
            Err(FeedError::SignedOut)
        ));
        assert!(matches!(
            NewPost::new("   ", "#tag", Some(&author)),
            Err(FeedError::EmptyUrl)
        ));
        assert!(matches!(
            NewPost::new("https://x", "", Some(&author)),
            Err(FeedError::EmptyTag)
        ));
        let ok = NewPost::new(" https://x ", "#tag", Some(&author)).unwrap();
        assert_eq!(ok.url, "https://x");
    }

    #[test]
    fn ownership() {
        let post = NewPost::new("https://x", "#t", Some(&Author::new("u1")))
            .unwrap()
            .into_post("p1".to_string(), Timestamp::from_secs(0));
        assert!(post.is_owned_by(Some("u1")));
        assert!(!post.is_owned_by(Some("u2")));
        assert!(!post.is_owned_by(None));
    }

    #[test]
    fn timestamp_millis() {
        let ts = Timestamp {
            seconds: 2,
            nanoseconds: 345_000_000,
        };
        assert_eq!(ts.as_millis(), 2345);
    }

    #[test]
    fn timestamp_millis_extremes_do_not_overflow() {
        assert_eq!(
            Timestamp::from_secs(i64::MAX).as_millis(),
            i128::from(i64::MAX) * 1000
        );
        assert_eq!(
            Timestamp::from_secs(i64::MIN).as_millis(),
            i128::from(i64::MIN) * 1000
        );
    }
}
