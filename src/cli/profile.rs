use crate::{
    info,
    management::SessionManager,
    render::{self, NOT_SIGNED_IN},
    types::Session,
};

/// Prints the stored profile, or a hint to log in.
pub async fn profile() {
    match SessionManager::default().restore().await {
        Some(session) => print_session(&session),
        None => {
            info!("{}", NOT_SIGNED_IN);
            info!("Run `discogrify login` to sign in with Spotify.");
        }
    }
}

pub(crate) fn print_session(session: &Session) {
    info!("Logged in as {}", session.profile.name());
    info!(
        "Signed in at {}",
        session.obtained_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("{}", render::profile_table(session));
}
