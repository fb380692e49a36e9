//! `clipstream delete <id> --uid <uid>` – delete one of your posts.

use anyhow::Result;
use clipstream_core::store::PostStore;

pub fn run_delete(store: &impl PostStore, id: &str, uid: &str) -> Result<()> {
    store.delete(id, Some(uid))?;
    println!("Deleted post {id}");
    Ok(())
}
