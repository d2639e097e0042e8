mod session;
mod verifier;

pub use session::SESSION_PROFILE_KEY;
pub use session::SESSION_TOKEN_KEY;
pub use session::SessionManager;
pub use verifier::VERIFIER_KEY;
pub use verifier::VerifierManager;
