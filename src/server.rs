use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    Res, api,
    config::AuthConfig,
    management::{SessionManager, VerifierManager},
    spotify::auth::CallbackGuard,
    types::AuthOutcome,
};

/// State shared by all handlers of the local server.
///
/// `outcome` holds the result of the last processed callback so the `login`
/// command can pick it up.
#[derive(Clone)]
pub struct AppState {
    pub config: AuthConfig,
    pub session: SessionManager,
    pub verifiers: VerifierManager,
    pub guard: CallbackGuard,
    pub outcome: Arc<Mutex<Option<AuthOutcome>>>,
}

impl AppState {
    /// Creates the state with an unlocked callback guard and no outcome.
    pub fn new(config: AuthConfig, session: SessionManager, verifiers: VerifierManager) -> Self {
        Self {
            config,
            session,
            verifiers,
            guard: CallbackGuard::new(),
            outcome: Arc::new(Mutex::new(None)),
        }
    }
}

/// Builds the app's routes.
///
/// # Routes
///
/// - `GET /` profile page or login button
/// - `GET /login` start of the PKCE flow
/// - `GET /callback` redirect URI registered with Spotify
/// - `POST /logout` clears the session
/// - `GET /health` status and version
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/logout", post(api::logout))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Binds the configured address and serves the app until the task is
/// dropped or the listener fails.
pub async fn start_api_server(state: AppState) -> Res<()> {
    let listener = TcpListener::bind(state.config.server_addr).await?;
    serve(listener, state).await
}

/// Serves the app on an already bound listener.
///
/// Used by `login`, which binds before opening the browser, and by tests,
/// which bind an ephemeral port.
pub async fn serve(listener: TcpListener, state: AppState) -> Res<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
