use reqwest::header::InvalidHeaderValue;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong between a pasted URL and a manifest URL.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input doesn't contain a `twitch.tv/videos/<digits>` path.
    #[error("invalid Twitch video URL format")]
    InvalidUrlFormat,

    /// Couldn't reach the GraphQL endpoint, or the body couldn't be read.
    #[error("error making request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered, but not with the JSON we expect.
    #[error("error parsing response: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// The response was well formed but had no usable `seekPreviewsURL`.
    #[error("seekPreviewsURL not found in response")]
    ManifestNotFound,

    #[error("client ID is not a valid header value: {0}")]
    InvalidClientId(#[from] InvalidHeaderValue),
}
