//! `clipstream resolve <url>` – print the embed URL for a clip link.

use anyhow::Result;
use clipstream_core::resolver::Resolver;

pub fn run_resolve(resolver: &impl Resolver, url: &str) -> Result<()> {
    match resolver.resolve(url) {
        Ok(target) => println!("{}\t{}", target.provider, target),
        Err(unresolved) => println!("unresolved: {}", unresolved),
    }
    Ok(())
}
