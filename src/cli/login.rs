use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::net::TcpListener;

use crate::{
    config::AuthConfig,
    error, info,
    management::{SessionManager, VerifierManager},
    server::{self, AppState},
    spotify::auth::{start_auth, wait_for_outcome},
    success,
    types::{AuthOutcome, Session},
    warning,
};

use super::profile::print_session;

/// Signs the user in, or shows who is signed in already.
///
/// A stored session is restored first. Without one the PKCE flow starts:
/// the verifier is stored, the local callback server is started, the
/// authorization URL is opened in the browser and the command waits for the
/// callback (bounded by `DISCOGRIFY_AUTH_TIMEOUT`). The callback handler
/// persists the session.
pub async fn login() {
    login_with(SessionManager::default(), VerifierManager::default()).await
}

/// [`login`] against the given stores.
///
/// The configuration is only loaded once it is clear the flow has to run,
/// so a stored session is shown even without a client id.
pub async fn login_with(session: SessionManager, verifiers: VerifierManager) {
    if let Some(existing) = session.restore().await {
        info!("Already signed in. Run `discogrify logout` to switch accounts.");
        print_session(&existing);
        return;
    }

    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let state = AppState::new(config.clone(), session, verifiers);

    let auth_url = match start_auth(&state.config, &state.verifiers).await {
        Ok(url) => url,
        Err(e) => error!("Cannot start authorization: {}", e),
    };

    let listener = match TcpListener::bind(config.server_addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Cannot listen on {}: {}", config.server_addr, e),
    };

    let server_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = server::serve(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for Spotify authorization...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let outcome = wait_for_outcome(state.outcome.clone(), config.auth_timeout).await;
    pb.finish_and_clear();

    match outcome {
        Some(AuthOutcome::Authenticated {
            access_token,
            profile,
        }) => {
            success!("Authentication successful!");
            print_session(&Session::new(access_token, profile));
            // the browser follows the redirect to `/` right after the callback
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
        Some(AuthOutcome::Failed { error }) => error!("Login failed: {}", error),
        None => error!("Authentication failed or timed out."),
    }
}
