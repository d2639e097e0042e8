//! Configuration management for discogrify.
//!
//! Values come from environment variables, which may be seeded from a `.env`
//! file. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`discogrify/.env`)
//! 3. `.env` file in the current working directory
//! 4. Application defaults (everything except the client id)

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::Res;

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8000/callback";
pub const DEFAULT_SCOPE: &str = "user-read-private user-read-email";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 120;

/// Returns the application's directory inside the platform local data dir.
///
/// - Linux: `~/.local/share/discogrify`
/// - macOS: `~/Library/Application Support/discogrify`
/// - Windows: `%LOCALAPPDATA%/discogrify`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("discogrify");
    path
}

/// Loads environment variables from the `.env` file in the local data
/// directory, creating the directory if needed.
///
/// When that file does not exist a `.env` in the working directory is tried
/// instead. Neither file being present is not an error: every setting except
/// the client id has a default.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the Spotify application client id (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| "SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string())
}

/// Returns the OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`).
///
/// Spotify compares it byte for byte with the URI registered for the app,
/// including protocol, host, port and path.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the requested scopes (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Returns the authorization endpoint (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Returns the token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

/// Returns the Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Returns the bind address of the local server (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns how long `login` waits for the callback (`DISCOGRIFY_AUTH_TIMEOUT`).
pub fn auth_timeout() -> Duration {
    let secs = env::var("DISCOGRIFY_AUTH_TIMEOUT")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_AUTH_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Everything the auth flow needs, resolved once and passed around.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: SocketAddr,
    pub auth_timeout: Duration,
}

impl AuthConfig {
    pub fn from_env() -> Res<Self> {
        let server_addr = SocketAddr::from_str(&server_addr())
            .map_err(|e| format!("Failed to parse server address: {}", e))?;

        Ok(Self {
            client_id: spotify_client_id()?,
            redirect_uri: spotify_redirect_uri(),
            scope: spotify_scope(),
            auth_url: spotify_apiauth_url(),
            token_url: spotify_apitoken_url(),
            api_url: spotify_apiurl(),
            server_addr,
            auth_timeout: auth_timeout(),
        })
    }

    /// Builds a config from the defaults with the given client id.
    pub fn with_client_id(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            server_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            auth_timeout: Duration::from_secs(DEFAULT_AUTH_TIMEOUT_SECS),
        }
    }
}
