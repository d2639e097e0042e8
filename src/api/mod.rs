//! # API Module
//!
//! HTTP handlers of the local web app served by [`crate::server`].
//!
//! ## Endpoints
//!
//! - [`home`] - `GET /` renders the profile or the login button
//! - [`login`] - `GET /login` starts the PKCE flow and redirects to Spotify
//! - [`callback`] - `GET /callback` exchanges the code and stores the session
//! - [`logout`] - `POST /logout` clears the session
//! - [`health`] - `GET /health` status and version
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use discogrify::{server::{AppState, router}, config::AuthConfig};
//!
//! let app = router(AppState::new(config, session, verifiers));
//! ```

mod callback;
mod health;
mod page;

pub use callback::callback;
pub use health::health;
pub use page::home;
pub use page::login;
pub use page::logout;
