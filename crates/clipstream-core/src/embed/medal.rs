//! Medal.tv clip links.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ClipUrl, EmbedTarget, Provider};

static CLIP_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:clips/|clip/)(?P<id>[^/?#]+)").unwrap());

pub(super) fn claims(host: &str) -> bool {
    host.contains("medal.tv")
}

pub(super) fn extract(clip: &ClipUrl<'_>) -> Option<EmbedTarget> {
    CLIP_PATH_RE
        .captures(clip.parsed.path())
        .and_then(|cap| cap.name("id"))
        .map(|id| {
            EmbedTarget::new(
                Provider::MedalClip,
                format!("https://medal.tv/clip/{}/embed", id.as_str()),
            )
        })
}
