use reqwest::Client;
use tracing::{debug, warn};

use crate::error::SpotifyError;

const BASE_URL: &str = "https://api.spotify.com/v1";

/// Client for the Spotify Web API catalog endpoints.
///
/// Authorization is the caller's responsibility: construct the inner
/// `reqwest::Client` with a bearer token default header (or any other
/// auth scheme) before handing it over.
pub struct SpotifyClient {
    client: Client,
    base_url: String,
}

impl SpotifyClient {
    /// Create a SpotifyClient with a pre-configured reqwest Client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a SpotifyClient with a custom base URL.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Spotify API returned an error");
            return Err(SpotifyError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        debug!(status = status.as_u16(), "decoding API response");
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = SpotifyClient::with_client(Client::new());
        assert_eq!(
            client.url("/shows/abc123"),
            "https://api.spotify.com/v1/shows/abc123"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = SpotifyClient::with_base_url(Client::new(), "http://localhost:8080/v1");
        assert_eq!(client.url("/episodes/x"), "http://localhost:8080/v1/episodes/x");
    }
}
