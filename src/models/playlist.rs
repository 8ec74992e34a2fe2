//! Playlist entries, the list shape that mixes episodes and tracks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::FullPlayableItem;

/// One entry of a playlist's item page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// When the item was added. Null for very old playlists.
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    /// Whether the item is a local file.
    #[serde(default)]
    pub is_local: bool,
    /// The playable payload, an episode or a track. Null when the item
    /// is no longer available.
    #[serde(rename = "track", default)]
    pub item: Option<FullPlayableItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_dispatches_on_payload_type() {
        let data = r#"{
            "added_at": "2022-03-04T05:06:07Z",
            "is_local": false,
            "track": {"type": "episode", "name": "Ep1", "duration_ms": 1000}
        }"#;
        let entry: PlaylistItem = serde_json::from_str(data).unwrap();
        let item = entry.item.expect("payload present");
        assert!(item.is_episode());
        assert_eq!(item.episode().unwrap().name, "Ep1");
    }

    #[test]
    fn test_unavailable_payload_is_none() {
        let entry: PlaylistItem = serde_json::from_str(r#"{"track": null}"#).unwrap();
        assert!(entry.item.is_none());
        assert!(entry.added_at.is_none());
    }
}
