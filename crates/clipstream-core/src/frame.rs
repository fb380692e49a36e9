//! HTML frame for a resolved clip, or the notice shown when a URL cannot be embedded.

use crate::embed::{EmbedTarget, Unresolved};

/// Player permissions granted to every embedded clip.
pub const FRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Shown in place of a player when the URL is unresolved.
pub const UNSUPPORTED_NOTICE: &str = "This URL cannot be embedded.";

/// Renders an `<iframe>` for an embed target, or a paragraph with
/// [`UNSUPPORTED_NOTICE`] when unresolved.
pub fn render_frame(resolution: &Result<EmbedTarget, Unresolved>) -> String {
    match resolution {
        Ok(target) => format!(
            r#"<iframe src="{}" allow="{}" allowfullscreen title="Clip"></iframe>"#,
            escape_attr(target.as_str()),
            FRAME_ALLOW
        ),
        Err(_) => format!("<p>{}</p>", UNSUPPORTED_NOTICE),
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
