use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::DecodeError;
use crate::models::{FullEpisode, FullTrack, SimpleEpisode, SimpleTrack};

/// First decode phase: only the discriminator is read.
#[derive(Deserialize)]
struct TypedItem {
    #[serde(rename = "type", default)]
    kind: String,
}

/// One entry of a list that mixes episodes and tracks.
///
/// The wire shape carries a `type` field naming the concrete payload.
/// `"episode"` decodes into the episode variant; `"track"` and any
/// unrecognized or missing value decode into the track variant.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayableItem<E, T> {
    Episode(E),
    Track(T),
}

/// Mixed item at the simple granularity.
pub type SimplePlayableItem = PlayableItem<SimpleEpisode, SimpleTrack>;

/// Mixed item at the full granularity, as returned inside playlists.
pub type FullPlayableItem = PlayableItem<FullEpisode, FullTrack>;

impl<E, T> PlayableItem<E, T> {
    /// The episode payload, if this item is one.
    pub fn episode(&self) -> Option<&E> {
        match self {
            Self::Episode(episode) => Some(episode),
            Self::Track(_) => None,
        }
    }

    /// The track payload, if this item is one.
    pub fn track(&self) -> Option<&T> {
        match self {
            Self::Episode(_) => None,
            Self::Track(track) => Some(track),
        }
    }

    pub fn is_episode(&self) -> bool {
        matches!(self, Self::Episode(_))
    }

    pub fn is_track(&self) -> bool {
        matches!(self, Self::Track(_))
    }
}

/// Decode one serialized catalog item into exactly one variant.
///
/// The input is parsed twice: once for the `type` discriminator, then
/// fully into the shape the discriminator selects. Either both stages
/// succeed and a single populated variant is returned, or the first
/// error is surfaced and no partial value escapes.
pub fn decode_item<E, T>(data: &[u8]) -> Result<PlayableItem<E, T>, DecodeError>
where
    E: DeserializeOwned,
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_slice(data).map_err(DecodeError::MalformedEnvelope)?;
    from_tagged_value(value)
}

fn from_tagged_value<E, T>(value: Value) -> Result<PlayableItem<E, T>, DecodeError>
where
    E: DeserializeOwned,
    T: DeserializeOwned,
{
    if !value.is_object() {
        return Err(DecodeError::MalformedEnvelope(de::Error::custom(
            "expected a JSON object",
        )));
    }
    let envelope = TypedItem::deserialize(&value).map_err(DecodeError::MalformedEnvelope)?;
    match envelope.kind.as_str() {
        "episode" => serde_json::from_value(value)
            .map(PlayableItem::Episode)
            .map_err(|source| DecodeError::SchemaMismatch {
                variant: "episode",
                source,
            }),
        _ => serde_json::from_value(value)
            .map(PlayableItem::Track)
            .map_err(|source| DecodeError::SchemaMismatch {
                variant: "track",
                source,
            }),
    }
}

impl<'de, E, T> Deserialize<'de> for PlayableItem<E, T>
where
    E: DeserializeOwned,
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        from_tagged_value(value).map_err(de::Error::custom)
    }
}

impl<E, T> Serialize for PlayableItem<E, T>
where
    E: Serialize,
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Episode(episode) => episode.serialize(serializer),
            Self::Track(track) => track.serialize(serializer),
        }
    }
}
