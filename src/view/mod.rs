//! Rendering.
//!
//! `model` turns application state into view-models; `html` and `text` draw
//! those view-models as a web page or as terminal output.

pub mod html;
pub mod model;
pub mod text;

pub use html::HtmlRenderer;
pub use model::{favorite_marker, Chrome, PageView, PanelVisibility, StarIcon, StoryView};

/// Host part of a story URL, without scheme, path or a leading `www.`.
///
/// URLs without a scheme are taken to start with the host. A `://` only
/// counts as the scheme separator before the first `/`, `?` or `#`.
pub fn host_name(url: &str) -> &str {
    let rest = match url.split_once("://") {
        Some((scheme, rest)) if !scheme.contains(['/', '?', '#']) => rest,
        _ => url,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    host.strip_prefix("www.").unwrap_or(host)
}
