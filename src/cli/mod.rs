//! # CLI Module
//!
//! Command-line front end for discogrify.
//!
//! ## Commands
//!
//! - [`login`] - Restores the stored session or runs the OAuth 2.0 PKCE flow
//! - [`profile`] - Shows the signed-in user's profile
//! - [`logout`] - Forgets the stored session
//! - [`serve`] - Runs the local web app (profile page, login, callback, logout)
//!
//! ## Usage Patterns
//!
//! ```bash
//! discogrify login          # Sign in through the browser
//! discogrify profile        # Show who is signed in
//! discogrify logout         # Forget the session
//! discogrify serve --open   # Same flow as a local web page
//! ```
//!
//! Every command reads its settings through [`crate::config`]. Fatal problems
//! are reported with the `error!` macro, which exits the process.

mod login;
mod logout;
mod profile;
mod serve;

pub use login::login;
pub use login::login_with;
pub use logout::logout;
pub use profile::profile;
pub use serve::serve;
