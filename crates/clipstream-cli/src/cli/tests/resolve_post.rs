//! Tests for resolve and post subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_resolve() {
    match parse(&["clipstream", "resolve", "https://youtu.be/dQw4w9WgXcQ"]) {
        CliCommand::Resolve { url, embed_host } => {
            assert_eq!(url, "https://youtu.be/dQw4w9WgXcQ");
            assert!(embed_host.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_embed_host() {
    match parse(&[
        "clipstream",
        "resolve",
        "https://www.twitch.tv/somechannel",
        "--embed-host",
        "example.com",
    ]) {
        CliCommand::Resolve { url, embed_host } => {
            assert_eq!(url, "https://www.twitch.tv/somechannel");
            assert_eq!(embed_host.as_deref(), Some("example.com"));
        }
        _ => panic!("expected Resolve with --embed-host"),
    }
}

#[test]
fn cli_parse_post() {
    match parse(&[
        "clipstream",
        "post",
        "https://medal.tv/clips/xyz789",
        "--tag",
        "#VALORANT",
        "--uid",
        "u1",
        "--name",
        "Ace",
    ]) {
        CliCommand::Post {
            url,
            tag,
            uid,
            name,
            photo,
        } => {
            assert_eq!(url, "https://medal.tv/clips/xyz789");
            assert_eq!(tag, "#VALORANT");
            assert_eq!(uid, "u1");
            assert_eq!(name.as_deref(), Some("Ace"));
            assert!(photo.is_none());
        }
        _ => panic!("expected Post"),
    }
}

#[test]
fn cli_parse_post_requires_tag_and_uid() {
    assert!(Cli::try_parse_from(["clipstream", "post", "https://x"]).is_err());
    assert!(Cli::try_parse_from(["clipstream", "post", "https://x", "--tag", "#a"]).is_err());
}
