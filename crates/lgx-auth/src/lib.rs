//! # lgx-auth
//!
//! Operator sessions for the Logix CLI.
//!
//! Provides credential login against the back-office API, OS keychain token
//! storage (`keyring`) with env and file fallbacks, session bootstrap from a
//! stored token, and logout. A 401 from the API is routed through
//! [`handle_unauthorized`] so stale credentials never linger.

pub mod claims;
pub mod error;
pub mod login;
pub mod session;
pub mod token_store;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use login::login;
pub use session::Session;

/// Bootstrap a session from the stored token.
///
/// Returns `Ok(None)` when no token is stored or the stored token has expired.
///
/// # Errors
///
/// Returns `AuthError` if the stored token is a malformed JWT.
pub fn resolve_session() -> Result<Option<Session>, AuthError> {
    session::from_stored_token()
}

/// Like [`resolve_session`], but a missing or expired session is an error.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` when there is no usable session.
pub fn require_session() -> Result<Session, AuthError> {
    resolve_session()?.ok_or(AuthError::NotAuthenticated)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    token_store::delete()
}

/// React to a 401 from the API: the session is no longer valid server-side,
/// so stored credentials are cleared.
pub fn handle_unauthorized() {
    tracing::warn!("API rejected the session token; clearing stored credentials");
    if let Err(error) = logout() {
        tracing::warn!(%error, "failed to clear credentials after 401");
    }
}
