//! CLI for ClipStream.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clipstream_core::config;
use clipstream_core::feed::{Author, Authorship, FeedFilter};
use clipstream_core::resolver::EmbedResolver;
use clipstream_core::store::JsonPostStore;

use commands::{run_delete, run_feed, run_post, run_resolve, run_tags};

/// Top-level CLI for ClipStream.
#[derive(Debug, Parser)]
#[command(name = "clipstream")]
#[command(about = "ClipStream: share gameplay clips in a 24-hour feed", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the embeddable player URL for a clip link.
    Resolve {
        /// YouTube, Twitch or Medal.tv link.
        url: String,
        /// Domain of the embedding page (default: `embed_host` from config).
        #[arg(long, value_name = "DOMAIN")]
        embed_host: Option<String>,
    },

    /// Post a clip link to the feed.
    Post {
        /// Clip URL.
        url: String,
        /// Game tag, e.g. "#VALORANT".
        #[arg(long)]
        tag: String,
        /// Author user id.
        #[arg(long)]
        uid: String,
        /// Author display name.
        #[arg(long)]
        name: Option<String>,
        /// Author avatar URL.
        #[arg(long)]
        photo: Option<String>,
    },

    /// Show posts from the last 24 hours (or the configured lifetime).
    Feed {
        /// Only posts with this tag.
        #[arg(long)]
        tag: Option<String>,
        /// Only posts by `--uid`. Shows nothing when no uid is given.
        #[arg(long)]
        mine: bool,
        /// Viewer user id.
        #[arg(long)]
        uid: Option<String>,
        /// Print iframe HTML instead of embed URLs.
        #[arg(long)]
        html: bool,
    },

    /// List the game tags used by stored posts.
    Tags,

    /// Delete one of your own posts.
    Delete {
        /// Post identifier.
        id: String,
        /// Your user id; must match the post's author.
        #[arg(long)]
        uid: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let embed_host = match &cli.command {
            CliCommand::Resolve {
                embed_host: Some(host),
                ..
            } => host.clone(),
            _ => cfg.embed_host.clone(),
        };
        let resolver = EmbedResolver::new(embed_host);

        if let CliCommand::Resolve { url, .. } = &cli.command {
            return run_resolve(&resolver, url);
        }

        let store = JsonPostStore::open(cfg.resolve_posts_path()?);
        tracing::debug!(path = %store.path().display(), "using post store");

        match cli.command {
            CliCommand::Resolve { .. } => {}
            CliCommand::Post {
                url,
                tag,
                uid,
                name,
                photo,
            } => {
                let author = Author {
                    uid,
                    display_name: name,
                    photo_url: photo,
                };
                run_post(&store, &url, &tag, &author)?;
            }
            CliCommand::Feed {
                tag,
                mine,
                uid,
                html,
            } => {
                let filter = FeedFilter {
                    tag,
                    authorship: if mine {
                        Authorship::Mine(uid)
                    } else {
                        Authorship::Everyone
                    },
                    ..cfg.feed_filter()
                };
                run_feed(&store, &resolver, &filter, html)?;
            }
            CliCommand::Tags => run_tags(&store)?,
            CliCommand::Delete { id, uid } => run_delete(&store, &id, &uid)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
