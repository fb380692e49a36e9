//! Resolver interface used by feed rendering.
//!
//! Rendering code only depends on this trait; the embed host a browser would
//! read from its own location is bound once here instead of being threaded
//! through every call.

use crate::embed::{resolve_embed, EmbedTarget, Unresolved};

/// Turns a stored clip URL into something a frame can show.
pub trait Resolver {
    fn resolve(&self, raw_url: &str) -> Result<EmbedTarget, Unresolved>;
}

/// Clip URL resolver bound to the embedding site's host.
#[derive(Debug, Clone)]
pub struct EmbedResolver {
    embed_host: String,
}

impl EmbedResolver {
    pub fn new(embed_host: impl Into<String>) -> Self {
        Self {
            embed_host: embed_host.into(),
        }
    }

    pub fn embed_host(&self) -> &str {
        &self.embed_host
    }
}

impl Resolver for EmbedResolver {
    fn resolve(&self, raw_url: &str) -> Result<EmbedTarget, Unresolved> {
        resolve_embed(raw_url, &self.embed_host)
    }
}
