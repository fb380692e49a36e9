//! YouTube watch, embed and youtu.be short links.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ClipUrl, EmbedTarget, Provider};

// Scanned against the raw input: youtu.be links carry the id in the path and
// have no `v` query parameter.
static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\?v=|/embed/|\.be/)(?P<id>[a-zA-Z0-9_-]{11})").unwrap());

pub(super) fn claims(host: &str) -> bool {
    host.contains("youtube.com") || host.contains("youtu.be")
}

pub(super) fn extract(clip: &ClipUrl<'_>) -> Option<EmbedTarget> {
    VIDEO_ID_RE
        .captures(clip.raw)
        .and_then(|cap| cap.name("id"))
        .map(|id| {
            EmbedTarget::new(
                Provider::YouTube,
                format!("https://www.youtube.com/embed/{}", id.as_str()),
            )
        })
}
