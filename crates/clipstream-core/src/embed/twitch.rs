//! Twitch clip links (two path shapes) and live channel links.
//!
//! Twitch refuses to be framed unless the player URL names the embedding
//! site in `parent`, so every target carries the caller's embed host.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ClipUrl, EmbedTarget, Provider};

const CLIPS_HOST: &str = "clips.twitch.tv";
const WWW_HOST: &str = "www.twitch.tv";

static CHANNEL_CLIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(?P<channel>[^/]+)/clip/(?P<clip>[^/?#]+)").unwrap());

pub(super) fn claims(host: &str) -> bool {
    host.contains("twitch.tv")
}

pub(super) fn extract(clip: &ClipUrl<'_>) -> Option<EmbedTarget> {
    let path = clip.parsed.path();
    match clip.host {
        CLIPS_HOST => {
            // clips.twitch.tv/{clipId}
            let id = path.strip_prefix('/').unwrap_or(path);
            (!id.is_empty()).then(|| clip_embed(id, clip.embed_host))
        }
        WWW_HOST => www_embed(path, clip.embed_host),
        _ => None,
    }
}

/// `www.twitch.tv/{channel}/clip/{clipId}` or `www.twitch.tv/{channel}`.
///
/// Any other path with a first segment is treated as a live channel.
fn www_embed(path: &str, embed_host: &str) -> Option<EmbedTarget> {
    if let Some(cap) = CHANNEL_CLIP_RE.captures(path) {
        return cap.name("clip").map(|id| clip_embed(id.as_str(), embed_host));
    }
    if path == "/" || path.contains("/clip/") {
        return None;
    }
    let channel = path.split('/').nth(1).filter(|s| !s.is_empty())?;
    Some(EmbedTarget::new(
        Provider::TwitchLive,
        format!(
            "https://player.twitch.tv/?channel={}&parent={}&muted=true",
            channel, embed_host
        ),
    ))
}

fn clip_embed(clip_id: &str, embed_host: &str) -> EmbedTarget {
    EmbedTarget::new(
        Provider::TwitchClip,
        format!(
            "https://clips.twitch.tv/embed?clip={}&parent={}",
            clip_id, embed_host
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn www_channel_with_trailing_segments_is_live() {
        let target = www_embed("/somechannel/videos/123", "example.com").unwrap();
        assert_eq!(target.provider, Provider::TwitchLive);
        assert_eq!(
            target.url,
            "https://player.twitch.tv/?channel=somechannel&parent=example.com&muted=true"
        );
    }

    #[test]
    fn www_root_and_broken_clip_paths() {
        assert!(www_embed("/", "example.com").is_none());
        assert!(www_embed("/somechannel/clip/", "example.com").is_none());
        assert!(www_embed("//clip/abc", "example.com").is_none());
    }

    #[test]
    fn empty_embed_host_is_passed_through() {
        let target = www_embed("/chan/clip/Xyz", "").unwrap();
        assert_eq!(target.url, "https://clips.twitch.tv/embed?clip=Xyz&parent=");
    }
}
