//! Show resources.

use std::collections::HashMap;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Copyright, Image, Page, SimpleEpisode, SpotifyId, SpotifyUri};

/// Basic data about a show.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleShow {
    /// Countries in which the show can be played, as ISO 3166-1 alpha-2
    /// codes.
    pub available_markets: Vec<String>,
    pub copyrights: Vec<Copyright>,
    pub description: String,
    /// Whether the show has explicit content (false also means unknown).
    pub explicit: bool,
    pub external_urls: HashMap<String, String>,
    /// Endpoint providing full details of the show.
    pub href: String,
    pub id: SpotifyId,
    /// Cover art in various sizes, widest first.
    pub images: Vec<Image>,
    /// True if all of the show's episodes are hosted outside the
    /// service's CDN. May be null.
    pub is_externally_hosted: Option<bool>,
    /// Languages used in the show, as ISO 639 codes.
    pub languages: Vec<String>,
    pub media_type: String,
    pub name: String,
    pub publisher: String,
    /// The object type: "show".
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: SpotifyUri,
}

/// Full data about a show.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullShow {
    #[serde(flatten)]
    pub show: SimpleShow,
    /// The show's episodes, paginated.
    #[serde(default)]
    pub episodes: Page<SimpleEpisode>,
}

impl Deref for FullShow {
    type Target = SimpleShow;

    fn deref(&self) -> &Self::Target {
        &self.show
    }
}

/// A show saved in the current user's library.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedShow {
    /// When the show was saved, as an ISO 8601 UTC timestamp.
    pub added_at: DateTime<Utc>,
    #[serde(default)]
    pub show: SimpleShow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_show_carries_episode_page() {
        let data = r#"{
            "name": "Some Show",
            "publisher": "Someone",
            "episodes": {
                "limit": 1,
                "total": 1,
                "items": [{"name": "Ep1", "duration_ms": 1000}]
            }
        }"#;
        let show: FullShow = serde_json::from_str(data).unwrap();
        assert_eq!(show.name, "Some Show");
        assert_eq!(show.episodes.items.len(), 1);
        assert_eq!(show.episodes.items[0].name, "Ep1");
    }

    #[test]
    fn test_nullable_hosting_flag() {
        let show: SimpleShow =
            serde_json::from_str(r#"{"name":"S","is_externally_hosted":null}"#).unwrap();
        assert_eq!(show.is_externally_hosted, None);

        let show: SimpleShow =
            serde_json::from_str(r#"{"name":"S","is_externally_hosted":true}"#).unwrap();
        assert_eq!(show.is_externally_hosted, Some(true));
    }

    #[test]
    fn test_saved_show_timestamp() {
        let saved: SavedShow = serde_json::from_str(
            r#"{"added_at":"2021-01-01T00:00:00Z","show":{"name":"S"}}"#,
        )
        .unwrap();
        assert_eq!(saved.added_at.to_rfc3339(), "2021-01-01T00:00:00+00:00");
        assert_eq!(saved.show.name, "S");
    }
}
