use crate::client::SpotifyClient;
use crate::models::{FullShow, Options, Page, SavedShow, SimpleEpisode};

impl SpotifyClient {
    /// Get catalog information for a single show.
    /// GET /shows/{id}
    pub async fn get_show(&self, id: &str) -> crate::Result<FullShow> {
        self.get_show_opt(id, &Options::new()).await
    }

    /// Like [`Self::get_show`] with an optional market parameter.
    pub async fn get_show_opt(&self, id: &str, opt: &Options) -> crate::Result<FullShow> {
        let url = self.url(&format!("/shows/{}", id));
        let response = self
            .client()
            .get(&url)
            .query(&opt.market_query())
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get a show's episodes, paginated.
    /// GET /shows/{id}/episodes
    pub async fn get_show_episodes(&self, id: &str) -> crate::Result<Page<SimpleEpisode>> {
        self.get_show_episodes_opt(id, &Options::new()).await
    }

    /// Like [`Self::get_show_episodes`] with optional market, limit and
    /// offset parameters.
    pub async fn get_show_episodes_opt(
        &self,
        id: &str,
        opt: &Options,
    ) -> crate::Result<Page<SimpleEpisode>> {
        let url = self.url(&format!("/shows/{}/episodes", id));
        let response = self
            .client()
            .get(&url)
            .query(&opt.page_query())
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the shows saved in the current user's library.
    /// GET /me/shows
    pub async fn get_saved_shows(&self) -> crate::Result<Page<SavedShow>> {
        self.get_saved_shows_opt(&Options::new()).await
    }

    /// Like [`Self::get_saved_shows`] with optional limit and offset
    /// parameters.
    pub async fn get_saved_shows_opt(&self, opt: &Options) -> crate::Result<Page<SavedShow>> {
        let url = self.url("/me/shows");
        let response = self
            .client()
            .get(&url)
            .query(&opt.page_query())
            .send()
            .await?;
        self.handle_response(response).await
    }
}
