use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::feed::FeedFilter;

/// Global configuration loaded from `~/.config/clipstream/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipstreamConfig {
    /// Domain of the site that frames the players; sent to Twitch as `parent`.
    pub embed_host: String,
    /// How long a post stays in the feed, in hours.
    pub post_lifetime_hours: u64,
    /// Optional location of the posts file (None = XDG data dir).
    #[serde(default)]
    pub posts_path: Option<PathBuf>,
}

impl Default for ClipstreamConfig {
    fn default() -> Self {
        Self {
            embed_host: "localhost".to_string(),
            post_lifetime_hours: 24,
            posts_path: None,
        }
    }
}

impl ClipstreamConfig {
    pub fn post_lifetime(&self) -> Duration {
        Duration::from_secs(self.post_lifetime_hours.saturating_mul(60 * 60))
    }

    /// Unfiltered feed using the configured lifetime.
    pub fn feed_filter(&self) -> FeedFilter {
        FeedFilter {
            lifetime: self.post_lifetime(),
            ..FeedFilter::default()
        }
    }

    /// `posts_path` if set, otherwise `~/.local/share/clipstream/posts.json`.
    pub fn resolve_posts_path(&self) -> Result<PathBuf> {
        match &self.posts_path {
            Some(p) => Ok(p.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("clipstream")?;
                Ok(xdg_dirs.place_data_file("posts.json")?)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipstream")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClipstreamConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClipstreamConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ClipstreamConfig = toml::from_str(&data)?;
    Ok(cfg)
}
