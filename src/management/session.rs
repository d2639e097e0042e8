use std::path::{Path, PathBuf};

use crate::{
    config,
    error::SessionError,
    types::{Profile, Session, StoredToken},
};

pub const SESSION_TOKEN_KEY: &str = "spotify_access_token";
pub const SESSION_PROFILE_KEY: &str = "spotify_profile";

/// Keeps the signed-in user between runs.
///
/// The session lives in two files, one for the access token and one for the
/// profile. Both have to be present and readable for a session to be
/// restored.
#[derive(Clone)]
pub struct SessionManager {
    root: PathBuf,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(config::data_dir())
    }
}

impl SessionManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Restores the session, or `None` when either half is missing or
    /// cannot be read.
    pub async fn restore(&self) -> Option<Session> {
        let token = async_fs::read_to_string(self.token_path()).await.ok()?;
        let profile = async_fs::read_to_string(self.profile_path()).await.ok()?;

        let token: StoredToken = serde_json::from_str(&token).ok()?;
        let profile: Profile = serde_json::from_str(&profile).ok()?;

        Some(Session {
            access_token: token.access_token,
            obtained_at: token.obtained_at,
            profile,
        })
    }

    pub async fn persist(&self, session: &Session) -> Result<(), SessionError> {
        async_fs::create_dir_all(self.session_dir()).await?;

        let token = StoredToken {
            access_token: session.access_token.clone(),
            obtained_at: session.obtained_at,
        };
        async_fs::write(self.token_path(), serde_json::to_string_pretty(&token)?).await?;
        async_fs::write(
            self.profile_path(),
            serde_json::to_string_pretty(&session.profile)?,
        )
        .await?;
        Ok(())
    }

    /// Removes both halves of the session. Missing files are fine.
    pub async fn clear(&self) -> Result<(), SessionError> {
        remove_if_exists(&self.token_path()).await?;
        remove_if_exists(&self.profile_path()).await?;
        Ok(())
    }

    fn session_dir(&self) -> PathBuf {
        self.root.join("session")
    }

    fn token_path(&self) -> PathBuf {
        self.session_dir()
            .join(format!("{key}.json", key = SESSION_TOKEN_KEY))
    }

    fn profile_path(&self) -> PathBuf {
        self.session_dir()
            .join(format!("{key}.json", key = SESSION_PROFILE_KEY))
    }
}

pub(crate) async fn remove_if_exists(path: &Path) -> Result<(), SessionError> {
    match async_fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SessionError::IoError(e)),
    }
}
