//! Video link helpers for project media.
//!
//! Portfolio entries link to a hosted video. The detail page plays it in an
//! iframe, which needs the provider's embed URL rather than the share link.

use std::sync::LazyLock;

use regex::Regex;

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:.*&)?v=|embed/|shorts/)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("valid regex")
});

static VIMEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.|player\.)?vimeo\.com/(?:video/)?(\d+)").expect("valid regex")
});

/// Convert a YouTube or Vimeo share link into its embeddable player URL.
///
/// Returns `None` for links from other providers.
pub fn embed_url(link: &str) -> Option<String> {
    if let Some(caps) = YOUTUBE_RE.captures(link) {
        return Some(format!("https://www.youtube.com/embed/{}", &caps[1]));
    }
    if let Some(caps) = VIMEO_RE.captures(link) {
        return Some(format!("https://player.vimeo.com/video/{}", &caps[1]));
    }
    None
}
