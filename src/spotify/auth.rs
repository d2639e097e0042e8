use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::{
    sync::Mutex,
    time::{Instant, sleep},
};
use url::Url;

use crate::{
    Res,
    config::AuthConfig,
    error::AuthError,
    management::VerifierManager,
    spotify::profile::fetch_profile,
    types::AuthOutcome,
    utils, warning,
};

/// Query parameters Spotify appends to the redirect URI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// In-memory flag that keeps a second callback from being processed while
/// one is in flight.
///
/// Clones share the flag. It is never persisted, so a restart always starts
/// unlocked.
#[derive(Debug, Clone, Default)]
pub struct CallbackGuard {
    handling: Arc<AtomicBool>,
}

/// Held while a callback is processed. Dropping it releases the guard.
pub struct CallbackHandling<'a> {
    guard: &'a CallbackGuard,
}

impl CallbackGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the flag, or returns `None` when a callback is already running.
    pub fn try_acquire(&self) -> Option<CallbackHandling<'_>> {
        self.handling
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CallbackHandling { guard: self })
    }

    pub fn is_handling(&self) -> bool {
        self.handling.load(Ordering::Acquire)
    }
}

impl Drop for CallbackHandling<'_> {
    fn drop(&mut self) {
        self.guard.handling.store(false, Ordering::Release);
    }
}

/// Starts the PKCE flow.
///
/// Generates a fresh verifier, stores it for the exchange step and returns
/// the authorization URL carrying the derived S256 challenge. Every call
/// replaces the previously stored verifier.
pub async fn start_auth(config: &AuthConfig, verifiers: &VerifierManager) -> Res<Url> {
    let code_verifier = utils::generate_code_verifier(utils::PKCE_VERIFIER_LENGTH);
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    verifiers.persist(&code_verifier).await?;

    Ok(utils::authorize_url(config, &code_challenge)?)
}

/// Processes the redirect back from Spotify.
///
/// Returns `None` when there is nothing to do: no code in the request, or
/// another callback already holds the guard. Otherwise the code is exchanged
/// for a token, the profile is fetched and the result is reported as an
/// [`AuthOutcome`]. The guard is released whatever the result.
pub async fn handle_auth_callback(
    config: &AuthConfig,
    verifiers: &VerifierManager,
    guard: &CallbackGuard,
    params: &CallbackParams,
) -> Option<AuthOutcome> {
    let Some(code) = params.code.as_deref().filter(|c| !c.is_empty()) else {
        return params.error.as_ref().map(|error| {
            warning!("Authorization was not granted: {}", error);
            AuthOutcome::Failed {
                error: error.clone(),
            }
        });
    };

    let _handling = guard.try_acquire()?;

    match exchange_and_fetch(config, verifiers, code).await {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            warning!("Callback handling failed: {}", e);
            Some(AuthOutcome::Failed {
                error: e.to_string(),
            })
        }
    }
}

async fn exchange_and_fetch(
    config: &AuthConfig,
    verifiers: &VerifierManager,
    code: &str,
) -> Result<AuthOutcome, AuthError> {
    let access_token = get_access_token(config, verifiers, code).await?;
    let profile = fetch_profile(config, &access_token).await?;
    Ok(AuthOutcome::Authenticated {
        access_token,
        profile,
    })
}

/// Exchanges an authorization code for an access token.
///
/// The stored verifier is sent along; when none is stored an empty verifier
/// goes out and the token endpoint rejects the request. On a non-2xx answer
/// the error carries `error_description`, else `error`, else the status.
pub async fn get_access_token(
    config: &AuthConfig,
    verifiers: &VerifierManager,
    code: &str,
) -> Result<String, AuthError> {
    let verifier = verifiers.load().await.unwrap_or_default();

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_verifier", verifier.as_str()),
        ])
        .send()
        .await?;

    let status = res.status();
    let json: Value = res.json().await.unwrap_or(Value::Null);

    if !status.is_success() {
        let message = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Token endpoint returned {}", status.as_u16()));
        return Err(AuthError::TokenEndpoint(message));
    }

    json["access_token"]
        .as_str()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or(AuthError::MissingAccessToken)
}

/// Waits for a callback outcome to show up in `outcome`.
///
/// Polls every 250ms until `max_wait` has elapsed and returns `None` on
/// timeout.
pub async fn wait_for_outcome(
    outcome: Arc<Mutex<Option<AuthOutcome>>>,
    max_wait: Duration,
) -> Option<AuthOutcome> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        if let Some(result) = outcome.lock().await.take() {
            return Some(result);
        }
        sleep(Duration::from_millis(250)).await;
    }

    None
}
