use crate::{error, management::SessionManager, success};

/// Clears the stored session. The PKCE verifier slot is left alone.
pub async fn logout() {
    if let Err(e) = SessionManager::default().clear().await {
        error!("Cannot clear session: {}", e);
    }
    success!("Logged out.");
}
