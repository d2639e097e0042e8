use reqwest::Client;
use serde_json::Value;

use crate::{config::AuthConfig, error::AuthError, types::Profile};

/// Fetches the current user's profile (`GET /me`).
///
/// # Errors
///
/// On a non-2xx answer the error carries the API's `error.message`, or
/// `Profile endpoint returned <status>` when the body has none.
pub async fn fetch_profile(config: &AuthConfig, token: &str) -> Result<Profile, AuthError> {
    let api_url = format!("{uri}/me", uri = config.api_url.trim_end_matches('/'));

    let client = Client::new();
    let res = client.get(&api_url).bearer_auth(token).send().await?;

    let status = res.status();
    if !status.is_success() {
        let json: Value = res.json().await.unwrap_or(Value::Null);
        let message = json["error"]["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Profile endpoint returned {}", status.as_u16()));
        return Err(AuthError::ProfileEndpoint(message));
    }

    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}
