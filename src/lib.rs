mod client;
mod episode;
mod error;
mod item;
pub mod models;
mod playlist;
mod show;

pub use client::SpotifyClient;
pub use error::{DecodeError, SpotifyError};
pub use item::{decode_item, FullPlayableItem, PlayableItem, SimplePlayableItem};
pub use models::{
    Copyright, FullEpisode, FullShow, FullTrack, Image, LinkedFrom, Options, Page, PlaylistItem,
    ResumePoint, SavedShow, SimpleAlbum, SimpleArtist, SimpleEpisode, SimpleShow, SimpleTrack,
    SpotifyId, SpotifyUri,
};

pub type Result<T> = std::result::Result<T, SpotifyError>;
