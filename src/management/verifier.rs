use std::path::PathBuf;

use crate::{config, error::SessionError};

use super::session::remove_if_exists;

pub const VERIFIER_KEY: &str = "verifier";

/// Durable slot for the PKCE code verifier.
///
/// Written when the flow starts and read back when the code is exchanged,
/// possibly by another process. Logging out does not touch it.
#[derive(Clone)]
pub struct VerifierManager {
    root: PathBuf,
}

impl Default for VerifierManager {
    fn default() -> Self {
        Self::new(config::data_dir())
    }
}

impl VerifierManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn persist(&self, verifier: &str) -> Result<(), SessionError> {
        async_fs::create_dir_all(&self.root).await?;
        async_fs::write(self.path(), verifier).await?;
        Ok(())
    }

    pub async fn load(&self) -> Option<String> {
        async_fs::read_to_string(self.path()).await.ok()
    }

    pub async fn clear(&self) -> Result<(), SessionError> {
        remove_if_exists(&self.path()).await
    }

    fn path(&self) -> PathBuf {
        self.root.join(VERIFIER_KEY)
    }
}
