//! Track resources, the non-episode half of mixed playlists.

use std::collections::HashMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{Image, SpotifyId, SpotifyUri};

/// Basic data about an artist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleArtist {
    pub external_urls: HashMap<String, String>,
    pub href: String,
    pub id: SpotifyId,
    pub name: String,
    /// The object type: "artist".
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: SpotifyUri,
}

/// Basic data about an album.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleAlbum {
    /// "album", "single" or "compilation".
    pub album_type: String,
    pub artists: Vec<SimpleArtist>,
    pub available_markets: Vec<String>,
    pub external_urls: HashMap<String, String>,
    pub href: String,
    pub id: SpotifyId,
    /// Cover art in various sizes, widest first.
    pub images: Vec<Image>,
    pub name: String,
    pub release_date: String,
    /// Precision of `release_date`: "year", "month", or "day".
    pub release_date_precision: String,
    /// The object type: "album".
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: SpotifyUri,
}

/// Basic data about a track.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleTrack {
    pub artists: Vec<SimpleArtist>,
    pub available_markets: Vec<String>,
    /// Disc number, usually 1 unless the album has more than one disc.
    pub disc_number: i32,
    /// Track length in milliseconds.
    pub duration_ms: u32,
    pub explicit: bool,
    pub external_urls: HashMap<String, String>,
    /// Endpoint providing full details of the track.
    pub href: String,
    pub id: SpotifyId,
    pub name: String,
    /// URL to a 30 second MP3 preview of the track.
    pub preview_url: String,
    /// Position on the disc.
    pub track_number: i32,
    /// The object type: "track".
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: SpotifyUri,
}

/// Full data about a track.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullTrack {
    #[serde(flatten)]
    pub track: SimpleTrack,
    #[serde(default)]
    pub album: SimpleAlbum,
    /// Known external IDs, e.g. "isrc".
    #[serde(default)]
    pub external_ids: HashMap<String, String>,
    /// Popularity between 0 and 100, 100 being the most popular.
    #[serde(default)]
    pub popularity: i32,
    /// Part of the response when track relinking is applied.
    #[serde(default)]
    pub is_playable: Option<bool>,
    /// The originally requested track when relinking is applied.
    #[serde(default)]
    pub linked_from: Option<LinkedFrom>,
}

impl Deref for FullTrack {
    type Target = SimpleTrack;

    fn deref(&self) -> &Self::Target {
        &self.track
    }
}

/// Pointer to the originally requested track when relinking is applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkedFrom {
    pub external_urls: HashMap<String, String>,
    pub href: String,
    pub id: SpotifyId,
    /// The object type: "track".
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: SpotifyUri,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_track_flattens_and_extends() {
        let data = r#"{
            "name": "Song1",
            "track_number": 3,
            "album": {"name": "Album1", "album_type": "album"},
            "popularity": 64,
            "artists": [{"name": "Artist1"}]
        }"#;
        let track: FullTrack = serde_json::from_str(data).unwrap();
        assert_eq!(track.name, "Song1");
        assert_eq!(track.track.track_number, 3);
        assert_eq!(track.album.name, "Album1");
        assert_eq!(track.popularity, 64);
        assert_eq!(track.artists[0].name, "Artist1");
    }

    #[test]
    fn test_relinking_fields_default_to_none() {
        let track: FullTrack = serde_json::from_str(r#"{"name":"Song1"}"#).unwrap();
        assert_eq!(track.is_playable, None);
        assert!(track.linked_from.is_none());
    }
}
