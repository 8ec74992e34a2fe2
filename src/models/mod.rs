mod common;
mod episode;
mod id;
mod playlist;
mod show;
mod track;

pub use common::{Copyright, Image, Options, Page};
pub use episode::{FullEpisode, ResumePoint, SimpleEpisode};
pub use id::{SpotifyId, SpotifyUri};
pub use playlist::PlaylistItem;
pub use show::{FullShow, SavedShow, SimpleShow};
pub use track::{FullTrack, LinkedFrom, SimpleAlbum, SimpleArtist, SimpleTrack};
