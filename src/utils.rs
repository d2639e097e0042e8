use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::AuthConfig;

/// Verifier length used by the flow (the RFC 7636 maximum).
pub const PKCE_VERIFIER_LENGTH: usize = 128;

/// Generates a PKCE code verifier.
///
/// Draws `length` characters uniformly from `[A-Za-z0-9]`, a subset of the
/// unreserved characters RFC 7636 allows. The flow always asks for
/// [`PKCE_VERIFIER_LENGTH`] characters.
///
/// # Arguments
///
/// * `length` - Number of characters to generate
///
/// # Example
///
/// ```
/// let verifier = generate_code_verifier(PKCE_VERIFIER_LENGTH);
/// assert_eq!(verifier.len(), 128);
/// ```
pub fn generate_code_verifier(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Derives the `S256` code challenge for a verifier.
///
/// # Returns
///
/// The SHA-256 digest of the verifier's bytes, base64url encoded without
/// padding (always 43 characters).
///
/// # Example
///
/// ```
/// let challenge = generate_code_challenge("abc");
/// assert_eq!(challenge, "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
/// ```
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Builds the authorization URL the user is sent to.
///
/// Query parameters, in order: `client_id`, `response_type=code`,
/// `redirect_uri`, `scope`, `code_challenge_method=S256`, `code_challenge`.
///
/// # Errors
///
/// Fails when `config.auth_url` is not a valid URL.
pub fn authorize_url(config: &AuthConfig, code_challenge: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
        ],
    )
}

/// Length of the access token in characters, `0` when there is none.
///
/// Shown on the profile view instead of the token itself.
pub fn token_length(token: Option<&str>) -> usize {
    token.map(|t| t.chars().count()).unwrap_or(0)
}
