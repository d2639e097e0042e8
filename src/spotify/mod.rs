//! # Spotify Integration Module
//!
//! Client side of the OAuth 2.0 Authorization Code flow with PKCE and the one
//! Web API call the app needs.
//!
//! ## Flow
//!
//! 1. **Code Verifier Generation**: 128 random alphanumeric characters
//! 2. **Challenge Creation**: base64url(SHA-256(verifier)), method `S256`
//! 3. **Authorization Request**: the user is sent to Spotify with the challenge
//! 4. **Callback**: Spotify redirects back with `?code=...`
//! 5. **Token Exchange**: code + stored verifier are traded for an access token
//! 6. **Profile**: `GET /me` with the bearer token
//!
//! Tokens are not refreshed. When the stored token stops working the user
//! logs out and in again.
//!
//! ## Endpoints
//!
//! - `GET https://accounts.spotify.com/authorize` (browser redirect)
//! - `POST https://accounts.spotify.com/api/token`
//! - `GET https://api.spotify.com/v1/me`
//!
//! All three are configurable, see [`crate::config::AuthConfig`].

pub mod auth;
pub mod profile;
