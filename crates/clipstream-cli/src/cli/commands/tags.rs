//! `clipstream tags` – list game tags in first-seen order.

use anyhow::Result;
use clipstream_core::feed::unique_tags;
use clipstream_core::store::PostStore;

pub fn run_tags(store: &impl PostStore) -> Result<()> {
    let tags = unique_tags(&store.list()?);
    if tags.is_empty() {
        println!("No tags yet.");
    }
    for tag in tags {
        println!("{tag}");
    }
    Ok(())
}
