use chrono::{DateTime, Utc};
use lgx_core::identity::SessionIdentity;
use serde::Serialize;

use crate::claims::SessionClaims;
use crate::error::AuthError;

const EXPIRY_BUFFER_SECS: i64 = 60;

/// An authenticated operator session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    #[serde(skip)]
    pub token: String,
    pub identity: SessionIdentity,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from a raw token.
    ///
    /// JWTs are decoded for identity and expiry. Opaque tokens are accepted
    /// with an unknown identity; the server remains the authority and a 401
    /// will clear them.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the token looks like a JWT but cannot be decoded.
    pub fn from_token(token: String) -> Result<Self, AuthError> {
        if token.split('.').count() != 3 {
            return Ok(Self {
                token,
                identity: SessionIdentity {
                    user_id: String::from("unknown"),
                    name: None,
                    email: None,
                    role: None,
                    hub: None,
                },
                expires_at: None,
            });
        }
        let claims = SessionClaims::decode(&token)?;
        Ok(Self {
            identity: claims.to_identity(),
            expires_at: claims.expires_at,
            token,
        })
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            expires_at <= Utc::now() + chrono::TimeDelta::seconds(EXPIRY_BUFFER_SECS)
        })
    }
}

/// Load the stored token and turn it into a live session.
pub(crate) fn from_stored_token() -> Result<Option<Session>, AuthError> {
    let Some(token) = crate::token_store::load() else {
        return Ok(None);
    };
    let session = Session::from_token(token)?;
    if session.is_expired() {
        tracing::warn!(
            expires_at = ?session.expires_at,
            "session token expired or expires within {EXPIRY_BUFFER_SECS}s — run `lgx auth login`",
        );
        return Ok(None);
    }
    Ok(Some(session))
}
