//! Clip URL resolution.
//!
//! Turns a user-submitted clip link (YouTube, Twitch, Medal.tv) into the URL
//! of the provider's embeddable player. Providers are checked in a fixed
//! order: YouTube, then Twitch, then Medal.tv. The first provider whose host
//! check claims the URL decides the outcome; later providers are never tried
//! for that input, even when the claiming provider finds no usable link shape.
//!
//! Resolution is pure: no I/O, no state, and the same `(raw_url, embed_host)`
//! pair always gives the same answer.

mod medal;
mod provider;
mod twitch;
mod unresolved;
mod youtube;

use std::fmt;

use url::Url;

pub use provider::Provider;
pub use unresolved::{Unresolved, UnresolvedReason};

/// A provider-hosted player URL, ready to be framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedTarget {
    pub provider: Provider,
    pub url: String,
}

impl EmbedTarget {
    pub fn new(provider: Provider, url: String) -> Self {
        Self { provider, url }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for EmbedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// What each provider rule gets to look at.
pub(crate) struct ClipUrl<'a> {
    /// The input exactly as the user typed it.
    pub raw: &'a str,
    pub parsed: &'a Url,
    /// Lowercased host of `parsed`.
    pub host: &'a str,
    pub embed_host: &'a str,
}

/// One entry of the provider table: a host check and the extractor that
/// runs once the host is claimed.
struct Rule {
    name: &'static str,
    claims: fn(&str) -> bool,
    extract: fn(&ClipUrl<'_>) -> Option<EmbedTarget>,
}

static RULES: [Rule; 3] = [
    Rule {
        name: "YouTube",
        claims: youtube::claims,
        extract: youtube::extract,
    },
    Rule {
        name: "Twitch",
        claims: twitch::claims,
        extract: twitch::extract,
    },
    Rule {
        name: "Medal.tv",
        claims: medal::claims,
        extract: medal::extract,
    },
];

/// Resolves `raw_url` into an embeddable player URL.
///
/// `embed_host` is the domain of the page that will frame the player; Twitch
/// requires it as the `parent` parameter. It is inserted verbatim.
///
/// Malformed or unsupported input is never an error condition for the caller
/// to propagate; it is reported as [`Unresolved`].
///
/// # Examples
///
/// - `resolve_embed("https://youtu.be/dQw4w9WgXcQ", "example.com")` →
///   `"https://www.youtube.com/embed/dQw4w9WgXcQ"`
/// - `resolve_embed("https://www.twitch.tv/somechannel", "example.com")` →
///   `"https://player.twitch.tv/?channel=somechannel&parent=example.com&muted=true"`
pub fn resolve_embed(raw_url: &str, embed_host: &str) -> Result<EmbedTarget, Unresolved> {
    let result = resolve_with_rules(raw_url, embed_host);
    match &result {
        Ok(target) => tracing::debug!(
            provider = %target.provider,
            embed = %target.url,
            "resolved clip url"
        ),
        Err(unresolved) => tracing::debug!(raw = raw_url, reason = %unresolved, "clip url unresolved"),
    }
    result
}

fn resolve_with_rules(raw_url: &str, embed_host: &str) -> Result<EmbedTarget, Unresolved> {
    let parsed =
        Url::parse(raw_url).map_err(|_| Unresolved::new(UnresolvedReason::InvalidUrl))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| Unresolved::new(UnresolvedReason::MissingHost))?;

    let rule = RULES
        .iter()
        .find(|rule| (rule.claims)(host))
        .ok_or_else(|| Unresolved::new(UnresolvedReason::UnsupportedHost))?;

    let clip = ClipUrl {
        raw: raw_url,
        parsed: &parsed,
        host,
        embed_host,
    };
    (rule.extract)(&clip).ok_or_else(|| {
        Unresolved::new(UnresolvedReason::NoMatch {
            provider: rule.name,
        })
    })
}
