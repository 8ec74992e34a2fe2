//! Episode resources.

use std::collections::HashMap;
use std::ops::Deref;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Image, SimpleShow, SpotifyId, SpotifyUri};

/// Basic data about an episode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleEpisode {
    /// URL to a 30 second MP3 preview of the episode.
    pub audio_preview_url: String,
    pub description: String,
    /// Episode length in milliseconds.
    pub duration_ms: u32,
    /// Whether the episode has explicit content (false also means unknown).
    pub explicit: bool,
    pub external_urls: HashMap<String, String>,
    /// Endpoint providing full details of the episode.
    pub href: String,
    pub id: SpotifyId,
    /// Cover art in various sizes, widest first.
    pub images: Vec<Image>,
    /// True if the episode is hosted outside the service's CDN.
    pub is_externally_hosted: bool,
    /// True if the episode is playable in the given market.
    pub is_playable: bool,
    /// Languages used in the episode, as ISO 639 codes.
    pub languages: Vec<String>,
    pub name: String,
    /// Release date, e.g. "1981-12-15". Depending on the precision it
    /// might be given as "1981" or "1981-12".
    pub release_date: String,
    /// Precision of `release_date`: "year", "month", or "day".
    pub release_date_precision: String,
    /// The user's most recent position in the episode. Only set when the
    /// request was authorized with the user-read-playback-position scope.
    pub resume_point: ResumePoint,
    /// The show the episode belongs to.
    pub show: SimpleShow,
    /// The object type: "episode".
    #[serde(rename = "type")]
    pub kind: String,
    pub uri: SpotifyUri,
}

impl SimpleEpisode {
    /// Release date narrowed by `release_date_precision`: "month"
    /// resolves to the first day of the month, "year" to January 1st.
    /// Returns None when the date does not parse.
    pub fn release_date_time(&self) -> Option<NaiveDate> {
        match self.release_date_precision.as_str() {
            "day" => NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok(),
            "month" => {
                let mut parts = self.release_date.splitn(2, '-');
                let year: i32 = parts.next()?.parse().ok()?;
                let month: u32 = parts.next()?.parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, 1)
            }
            _ => {
                let year: i32 = self.release_date.parse().ok()?;
                NaiveDate::from_ymd_opt(year, 1, 1)
            }
        }
    }
}

/// Full data about an episode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullEpisode {
    #[serde(flatten)]
    pub episode: SimpleEpisode,
}

impl Deref for FullEpisode {
    type Target = SimpleEpisode;

    fn deref(&self) -> &Self::Target {
        &self.episode
    }
}

/// The user's most recent position in an episode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumePoint {
    /// Whether the episode has been fully played by the user.
    pub fully_played: bool,
    /// Most recent position in milliseconds.
    pub resume_position_ms: u32,
}
