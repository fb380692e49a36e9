//! Integration test: posts go into a JSON store, come back through the feed
//! filters, and every visible post renders as a player frame or the
//! unsupported-URL notice.

use clipstream_core::embed::Provider;
use clipstream_core::feed::{filter_feed, unique_tags, Author, Authorship, FeedFilter, NewPost, Timestamp};
use clipstream_core::frame::{render_frame, UNSUPPORTED_NOTICE};
use clipstream_core::resolver::{EmbedResolver, Resolver};
use clipstream_core::store::{JsonPostStore, PostStore};
use tempfile::tempdir;

const NOW: i64 = 1_750_000_000;
const HOUR: i64 = 60 * 60;

fn submit(store: &JsonPostStore, url: &str, tag: &str, uid: &str, age_secs: i64) {
    let author = Author {
        uid: uid.to_string(),
        display_name: Some(format!("player-{uid}")),
        photo_url: None,
    };
    let post = NewPost::new(url, tag, Some(&author)).expect("valid post");
    store
        .add(post, Timestamp::from_secs(NOW - age_secs))
        .expect("store post");
}

#[test]
fn feed_filters_and_renders_stored_posts() {
    let dir = tempdir().unwrap();
    let store = JsonPostStore::open(dir.path().join("posts.json"));

    submit(&store, "https://www.youtube.com/watch?v=dQw4w9WgXcQ", "#VALORANT", "u1", HOUR);
    submit(&store, "https://www.twitch.tv/somechannel/clip/AbcClipId123", "#APEX", "u2", 2 * HOUR);
    submit(&store, "https://example.org/not-a-clip", "#VALORANT", "u2", 3 * HOUR);
    submit(&store, "https://medal.tv/clips/xyz789", "#OLD", "u1", 25 * HOUR);

    let posts = store.list().unwrap();
    assert_eq!(posts.len(), 4);
    assert_eq!(
        unique_tags(&posts),
        vec!["#VALORANT", "#APEX", "#OLD"]
    );

    let now = Timestamp::from_secs(NOW);
    let visible = filter_feed(&posts, &FeedFilter::default(), now);
    assert_eq!(visible.len(), 3, "25h old post drops out");

    let resolver = EmbedResolver::new("example.com");
    let providers: Vec<Provider> = visible
        .iter()
        .map(|p| Provider::of(&resolver.resolve(&p.url)))
        .collect();
    assert_eq!(
        providers,
        vec![Provider::YouTube, Provider::TwitchClip, Provider::Unknown]
    );

    let frames: Vec<String> = visible
        .iter()
        .map(|p| render_frame(&resolver.resolve(&p.url)))
        .collect();
    assert!(frames[0].contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
    assert!(frames[1].contains("clip=AbcClipId123&amp;parent=example.com"));
    assert!(frames[2].contains(UNSUPPORTED_NOTICE));

    let mine = FeedFilter {
        tag: Some("#VALORANT".to_string()),
        authorship: Authorship::Mine(Some("u2".to_string())),
        ..FeedFilter::default()
    };
    let kept = filter_feed(&posts, &mine, now);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].url, "https://example.org/not-a-clip");
}

#[test]
fn deleting_removes_post_from_feed() {
    let dir = tempdir().unwrap();
    let store = JsonPostStore::open(dir.path().join("posts.json"));
    submit(&store, "https://clips.twitch.tv/AbcClipId123", "#APEX", "u1", 0);

    let id = store.list().unwrap()[0].id.clone().unwrap();
    assert!(store.delete(&id, Some("u2")).is_err());
    store.delete(&id, Some("u1")).unwrap();

    let posts = store.list().unwrap();
    assert!(filter_feed(&posts, &FeedFilter::default(), Timestamp::from_secs(NOW)).is_empty());
}
