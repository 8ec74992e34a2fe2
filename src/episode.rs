use crate::client::SpotifyClient;
use crate::models::{FullEpisode, Options};

impl SpotifyClient {
    /// Get catalog information for a single episode.
    /// GET /episodes/{id}
    pub async fn get_episode(&self, id: &str) -> crate::Result<FullEpisode> {
        self.get_episode_opt(id, &Options::new()).await
    }

    /// Like [`Self::get_episode`] with an optional market parameter.
    pub async fn get_episode_opt(&self, id: &str, opt: &Options) -> crate::Result<FullEpisode> {
        let url = self.url(&format!("/episodes/{}", id));
        let response = self
            .client()
            .get(&url)
            .query(&opt.market_query())
            .send()
            .await?;
        self.handle_response(response).await
    }
}
