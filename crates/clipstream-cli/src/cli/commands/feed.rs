//! `clipstream feed` – show the rolling feed with each post's embed.

use anyhow::Result;
use clipstream_core::embed::{EmbedTarget, Provider, Unresolved};
use clipstream_core::feed::{filter_feed, FeedFilter, Post, Timestamp};
use clipstream_core::frame::render_frame;
use clipstream_core::resolver::Resolver;
use clipstream_core::store::PostStore;

pub fn run_feed(
    store: &impl PostStore,
    resolver: &impl Resolver,
    filter: &FeedFilter,
    html: bool,
) -> Result<()> {
    let posts = store.list()?;
    let visible = filter_feed(&posts, filter, Timestamp::now());
    tracing::debug!(total = posts.len(), visible = visible.len(), "filtered feed");

    if visible.is_empty() {
        println!("No posts in the feed.");
        return Ok(());
    }
    if !html {
        println!(
            "{:<36} {:<16} {:<16} {:<12} {}",
            "ID", "TAG", "AUTHOR", "PROVIDER", "EMBED"
        );
    }
    for post in visible {
        let embed = resolver.resolve(&post.url);
        if html {
            println!("{}", html_item(post, &embed));
        } else {
            println!("{}", text_row(post, &embed));
        }
    }
    Ok(())
}

fn author(post: &Post) -> &str {
    post.display_name.as_deref().unwrap_or("anonymous")
}

fn text_row(post: &Post, embed: &Result<EmbedTarget, Unresolved>) -> String {
    let target = match embed {
        Ok(target) => target.url.clone(),
        Err(unresolved) => format!("({})", unresolved),
    };
    format!(
        "{:<36} {:<16} {:<16} {:<12} {}",
        post.id.as_deref().unwrap_or("-"),
        post.tag,
        author(post),
        Provider::of(embed),
        target
    )
}

fn html_item(post: &Post, embed: &Result<EmbedTarget, Unresolved>) -> String {
    format!(
        "<article data-id=\"{}\">\n<header>{} {}</header>\n{}\n</article>",
        post.id.as_deref().unwrap_or(""),
        author(post),
        post.tag,
        render_frame(embed)
    )
}
