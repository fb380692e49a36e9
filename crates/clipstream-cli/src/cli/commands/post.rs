//! `clipstream post <url> --tag <tag> --uid <uid>` – add a clip to the feed.

use anyhow::Result;
use clipstream_core::feed::{Author, NewPost, Timestamp};
use clipstream_core::store::PostStore;

pub fn run_post(store: &impl PostStore, url: &str, tag: &str, author: &Author) -> Result<()> {
    let new_post = NewPost::new(url, tag, Some(author))?;
    let post = store.add(new_post, Timestamp::now())?;
    println!(
        "Posted {} [{}]",
        post.id.as_deref().unwrap_or("-"),
        post.tag
    );
    Ok(())
}
