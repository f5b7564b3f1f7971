//! Creator profile shown on the about and contact pages.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;
use crate::links::safe_url;

/// Contact address used when no profile is available.
pub const CONTACT_EMAIL: &str = "business@dazztrazak.com";

/// Social links used when the profile is missing or lists none.
pub const DEFAULT_SOCIAL_LINKS: [(&str, &str); 2] = [
    ("youtube", "https://youtube.com/@dazztrazak"),
    ("twitter", "https://twitter.com/dazztrazak"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub display_name: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub website_url: Option<String>,
    /// Platform name to profile URL, in upstream order.
    #[serde(default, deserialize_with = "lenient::object")]
    pub social_links: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub platform_stats: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub audience_demographics: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub content_niches: Option<Vec<String>>,
}

impl CreatorProfile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            tagline: None,
            bio: None,
            photo_url: None,
            location: None,
            website_url: None,
            social_links: None,
            platform_stats: None,
            audience_demographics: None,
            content_niches: None,
        }
    }
}

/// Social links to render: the profile's `https` links, or the defaults when
/// there is no profile or none of its links survive.
pub fn social_links(profile: Option<&CreatorProfile>) -> Vec<(&str, &str)> {
    let links: Vec<(&str, &str)> = profile
        .and_then(|p| p.social_links.as_ref())
        .map(|links| {
            links
                .iter()
                .filter_map(|(name, url)| Some((name.as_str(), url.as_str().and_then(safe_url)?)))
                .collect()
        })
        .unwrap_or_default();

    if links.is_empty() {
        DEFAULT_SOCIAL_LINKS.to_vec()
    } else {
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_profile_with_malformed_fields() {
        let profile: CreatorProfile = serde_json::from_value(json!({
            "display_name": "Dazz",
            "tagline": 7,
            "social_links": ["youtube"],
            "platform_stats": { "youtube_subscribers": 120000 },
            "content_niches": ["mice", "mousepads"]
        }))
        .unwrap();
        assert_eq!(profile.tagline, None);
        assert_eq!(profile.social_links, None);
        assert_eq!(profile.platform_stats.unwrap()["youtube_subscribers"], 120000);
        assert_eq!(profile.content_niches.unwrap(), vec!["mice", "mousepads"]);
    }

    #[test]
    fn social_links_fall_back_to_defaults() {
        assert_eq!(social_links(None), DEFAULT_SOCIAL_LINKS.to_vec());

        let mut profile = CreatorProfile::new("Dazz");
        assert_eq!(social_links(Some(&profile)), DEFAULT_SOCIAL_LINKS.to_vec());

        profile.social_links = json!({ "twitch": "http://twitch.example/dazz", "x": 5 })
            .as_object()
            .cloned();
        assert_eq!(social_links(Some(&profile)), DEFAULT_SOCIAL_LINKS.to_vec());
    }

    #[test]
    fn social_links_keep_profile_order() {
        let mut profile = CreatorProfile::new("Dazz");
        profile.social_links = json!({
            "twitch": "https://twitch.example/dazz",
            "youtube": "https://youtube.example/@dazz"
        })
        .as_object()
        .cloned();
        assert_eq!(
            social_links(Some(&profile)),
            vec![
                ("twitch", "https://twitch.example/dazz"),
                ("youtube", "https://youtube.example/@dazz"),
            ]
        );
    }
}
