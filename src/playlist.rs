use crate::client::SpotifyClient;
use crate::models::{Options, Page, PlaylistItem};

impl SpotifyClient {
    /// Get a playlist's items, paginated. The returned entries mix
    /// episodes and tracks.
    /// GET /playlists/{id}/tracks
    pub async fn get_playlist_items(&self, id: &str) -> crate::Result<Page<PlaylistItem>> {
        self.get_playlist_items_opt(id, &Options::new()).await
    }

    /// Like [`Self::get_playlist_items`] with optional market, limit and
    /// offset parameters.
    pub async fn get_playlist_items_opt(
        &self,
        id: &str,
        opt: &Options,
    ) -> crate::Result<Page<PlaylistItem>> {
        let url = self.url(&format!("/playlists/{}/tracks", id));
        let response = self
            .client()
            .get(&url)
            .query(&opt.page_query())
            .send()
            .await?;
        self.handle_response(response).await
    }
}
