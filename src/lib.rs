//! discogrify library
//!
//! Signs a user in to the Spotify Web API with the OAuth 2.0 Authorization
//! Code flow and PKCE, fetches their profile and keeps a lightweight session
//! on disk so it survives restarts until the user logs out.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local web app (page, login, callback, logout)
//! - `cli` - Command-line front end
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for the auth flow and storage
//! - `management` - Session and verifier storage
//! - `render` - Profile rendering for the terminal and the web page
//! - `server` - Local HTTP server for the web app and OAuth callback
//! - `spotify` - PKCE flow, token exchange and profile client
//! - `types` - Data structures and type definitions
//! - `utils` - PKCE helpers and small utilities
//!
//! # Example
//!
//! ```
//! use discogrify::{config, management::SessionManager};
//!
//! #[tokio::main]
//! async fn main() -> discogrify::Res<()> {
//!     config::load_env().await?;
//!     if let Some(session) = SessionManager::default().restore().await {
//!         println!("{}", session.profile.id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod render;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for top-level plumbing (CLI commands, server startup).
///
/// Auth and storage operations return their own error types from
/// the `error` module; both convert into the boxed error here.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints `[o] <message>` with a blue marker.
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints `[✓] <message>` with a green marker.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints `[!] <message>` with a red marker and exits with status 1.
///
/// Only for fatal errors in command handlers; library code returns errors.
///
/// ```
/// error!("Cannot listen on {}: {}", addr, err);
/// // unreachable
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints `[!] <message>` with a yellow marker and carries on.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
