use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    render::{PageView, html_page},
    server::AppState,
    spotify::auth::start_auth,
    warning,
};

/// `GET /`: the profile when a session exists, the login button otherwise.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    match state.session.restore().await {
        Some(session) => Html(html_page(PageView::SignedIn(&session))),
        None => Html(html_page(PageView::SignedOut)),
    }
}

/// `GET /login`: starts the PKCE flow and redirects to Spotify.
pub async fn login(State(state): State<AppState>) -> Response {
    match start_auth(&state.config, &state.verifiers).await {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(e) => {
            warning!("Cannot start authorization: {}", e);
            let message = e.to_string();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(html_page(PageView::Error(&message))),
            )
                .into_response()
        }
    }
}

/// `POST /logout`: forgets the session.
pub async fn logout(State(state): State<AppState>) -> Redirect {
    if let Err(e) = state.session.clear().await {
        warning!("Cannot clear session: {}", e);
    }
    *state.outcome.lock().await = None;
    Redirect::to("/")
}
