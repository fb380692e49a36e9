//! Feed filters: the rolling time window, tag selection and "my posts".

use std::collections::HashSet;
use std::time::Duration;

use super::{Post, Timestamp};

/// Posts older than this drop out of the feed.
pub const POST_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Whose posts to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Authorship {
    #[default]
    Everyone,
    /// Only posts by this viewer. `None` means the viewer is signed out, so
    /// nothing matches.
    Mine(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFilter {
    pub lifetime: Duration,
    pub tag: Option<String>,
    pub authorship: Authorship,
}

impl Default for FeedFilter {
    fn default() -> Self {
        Self {
            lifetime: POST_LIFETIME,
            tag: None,
            authorship: Authorship::Everyone,
        }
    }
}

impl FeedFilter {
    pub fn matches(&self, post: &Post, now: Timestamp) -> bool {
        let age_ms = now.as_millis() - post.created_at.as_millis();
        let lifetime_ms = i128::try_from(self.lifetime.as_millis()).unwrap_or(i128::MAX);
        if age_ms > lifetime_ms {
            return false;
        }
        if let Some(tag) = &self.tag {
            if &post.tag != tag {
                return false;
            }
        }
        match &self.authorship {
            Authorship::Everyone => true,
            Authorship::Mine(viewer) => post.is_owned_by(viewer.as_deref()),
        }
    }
}

/// Posts passing `filter`, in their original order.
pub fn filter_feed<'a>(posts: &'a [Post], filter: &FeedFilter, now: Timestamp) -> Vec<&'a Post> {
    posts.iter().filter(|p| filter.matches(p, now)).collect()
}

/// Distinct tags across all posts, in order of first appearance.
pub fn unique_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .filter(|p| seen.insert(p.tag.as_str()))
        .map(|p| p.tag.clone())
        .collect()
}

pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
