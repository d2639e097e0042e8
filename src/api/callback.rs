use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    info,
    render::{PageView, html_page},
    server::AppState,
    spotify::auth::{CallbackParams, handle_auth_callback},
    types::{AuthOutcome, Session},
    warning,
};

/// `GET /callback`: the redirect URI registered with Spotify.
///
/// A stored session wins: when one exists the code is left unused and the
/// browser goes straight to `/`. Otherwise, on success the session is
/// persisted and the browser is sent to `/`, which also drops `code` from the
/// address bar. A failure renders the error.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Response {
    if state.session.restore().await.is_some() {
        return Redirect::to("/").into_response();
    }

    let outcome =
        handle_auth_callback(&state.config, &state.verifiers, &state.guard, &params).await;

    let Some(outcome) = outcome else {
        return Redirect::to("/").into_response();
    };

    *state.outcome.lock().await = Some(outcome.clone());

    match outcome {
        AuthOutcome::Authenticated {
            access_token,
            profile,
        } => {
            let session = Session::new(access_token, profile);
            if let Err(e) = state.session.persist(&session).await {
                warning!("Cannot persist session: {}", e);
            }
            info!("Stored session for {}", session.profile.name());
            Redirect::to("/").into_response()
        }
        AuthOutcome::Failed { error } => Html(html_page(PageView::Error(&error))).into_response(),
    }
}
