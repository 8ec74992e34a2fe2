use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to decode playable item: {0}")]
    Decode(#[from] DecodeError),
}

/// Error when decoding a single playable item (episode or track).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not a JSON object with a readable `type` field.
    #[error("Input is not a typed JSON object: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// The discriminator resolved, but the payload does not fit the
    /// targeted shape.
    #[error("Payload does not match the {variant} shape: {source}")]
    SchemaMismatch {
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
