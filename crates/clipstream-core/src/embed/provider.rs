//! Embed provider kinds.

use std::fmt;

use super::{EmbedTarget, Unresolved};

/// Which player an embed URL points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    YouTube,
    TwitchClip,
    TwitchLive,
    MedalClip,
    /// No provider could be derived (the input was unresolved).
    Unknown,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::TwitchClip => "twitch-clip",
            Provider::TwitchLive => "twitch-live",
            Provider::MedalClip => "medal-clip",
            Provider::Unknown => "unknown",
        }
    }

    /// Provider of a resolution result; `Unknown` when unresolved.
    pub fn of(result: &Result<EmbedTarget, Unresolved>) -> Self {
        match result {
            Ok(target) => target.provider,
            Err(_) => Provider::Unknown,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
