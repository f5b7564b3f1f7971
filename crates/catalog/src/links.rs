//! Sanitizers for outbound links carried on product records.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use storefront_core::{DomainError, DomainResult};

/// Privacy-enhanced embed base URL.
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed/";

/// Sandbox attribute applied to embedded video iframes.
pub const YOUTUBE_IFRAME_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-presentation allow-popups";

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("video id pattern is a valid regex")
});

const YOUTUBE_HOSTS: [&str; 3] = ["youtube.com", "youtube-nocookie.com", "m.youtube.com"];
const YOUTUBE_PATH_KINDS: [&str; 3] = ["embed", "shorts", "live"];

/// Parse `raw` as an absolute URL, requiring the `https` scheme.
pub fn parse_https_url(raw: &str) -> DomainResult<Url> {
    let url = Url::parse(raw).map_err(|e| DomainError::invalid_url(format!("{raw:?}: {e}")))?;
    if url.scheme() != "https" {
        return Err(DomainError::invalid_url(format!(
            "{raw:?}: scheme {} is not allowed",
            url.scheme()
        )));
    }
    Ok(url)
}

/// Returns `raw` only if it parses as an absolute `https` URL.
pub fn safe_url(raw: &str) -> Option<&str> {
    if raw.is_empty() {
        return None;
    }
    match parse_https_url(raw) {
        Ok(_) => Some(raw),
        Err(err) => {
            debug!(error = %err, "dropped unsafe link");
            None
        }
    }
}

/// Extract a YouTube video id from the common watch/embed/short URL shapes.
pub fn extract_youtube_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let id = if YOUTUBE_HOSTS.contains(&host) {
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
            .or_else(|| {
                let mut segments = url.path_segments()?;
                let kind = segments.next()?;
                let id = segments.next()?;
                (YOUTUBE_PATH_KINDS.contains(&kind) && !id.is_empty()).then(|| id.to_string())
            })
    } else if host == "youtu.be" {
        url.path_segments()
            .and_then(|mut s| s.next())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    } else {
        None
    };

    id.filter(|id| YOUTUBE_ID.is_match(id))
}

/// Embed URL for a video id previously returned by [`extract_youtube_id`].
pub fn youtube_embed_url(id: &str) -> String {
    format!("{YOUTUBE_EMBED_BASE}{id}")
}
