use thiserror::Error;

/// Failures of the token exchange and the profile request.
///
/// The `Display` output is what the user gets to see, so the endpoint
/// variants carry the provider's own message verbatim.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Non-2xx answer from the token endpoint.
    #[error("{0}")]
    TokenEndpoint(String),

    #[error("No access token returned from token endpoint")]
    MissingAccessToken,

    /// Non-2xx answer from `/me`.
    #[error("{0}")]
    ProfileEndpoint(String),

    #[error("Invalid profile payload: {0}")]
    InvalidProfile(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}
