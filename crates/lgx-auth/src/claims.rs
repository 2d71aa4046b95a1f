use base64::Engine as _;
use chrono::{DateTime, Utc};
use lgx_core::enums::EmployeeRole;
use lgx_core::identity::SessionIdentity;
use serde::Deserialize;

use crate::error::AuthError;

/// Claims read from the session JWT payload.
///
/// The signature is NOT verified; the server does that on every request.
/// These claims only drive local decisions (expiry warnings, default hub).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<EmployeeRole>,
    pub hub: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(alias = "_id", alias = "id", alias = "userId")]
    sub: Option<String>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    hub: Option<String>,
    exp: Option<i64>,
}

impl SessionClaims {
    /// Decode the payload segment of a JWT.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Other` if the token is not a three-part JWT, the
    /// payload is not base64url JSON, or the subject is missing.
    pub fn decode(jwt: &str) -> Result<Self, AuthError> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return Err(AuthError::Other("invalid JWT format".into()));
        }
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .map_err(|e| AuthError::Other(format!("base64 decode failed: {e}")))?;
        let raw: RawClaims = serde_json::from_slice(&payload)
            .map_err(|e| AuthError::Other(format!("JSON parse failed: {e}")))?;

        let user_id = raw
            .sub
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::Other("missing subject claim".into()))?;
        let expires_at = match raw.exp {
            Some(exp) => Some(
                DateTime::from_timestamp(exp, 0)
                    .ok_or_else(|| AuthError::Other("invalid exp timestamp".into()))?,
            ),
            None => None,
        };
        let role = raw.role.as_deref().and_then(parse_role);

        Ok(Self {
            user_id,
            name: raw.name,
            email: raw.email,
            role,
            hub: raw.hub,
            expires_at,
        })
    }

    /// Check if the token is expired or expires within `buffer_secs`.
    /// Tokens without `exp` never expire locally.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            let threshold = Utc::now() + chrono::TimeDelta::seconds(buffer_secs);
            expires_at <= threshold
        })
    }

    #[must_use]
    pub fn to_identity(&self) -> SessionIdentity {
        SessionIdentity {
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            hub: self.hub.clone(),
        }
    }
}

fn parse_role(raw: &str) -> Option<EmployeeRole> {
    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    serde_json::from_value(serde_json::Value::String(normalized)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256"}"#),
            engine.encode(payload),
            engine.encode("fake_sig")
        )
    }

    #[test]
    fn decodes_full_payload() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(
            r#"{{"_id":"u-1","name":"Meera","email":"m@example.in","role":"Hub Manager","hub":"hub-1","exp":{exp}}}"#
        ));
        let claims = SessionClaims::decode(&jwt).unwrap();
        assert_eq!(claims.user_id, "u-1");
        assert_eq!(claims.role, Some(EmployeeRole::HubManager));
        assert_eq!(claims.hub.as_deref(), Some("hub-1"));
        assert_eq!(claims.expires_at.map(|d| d.timestamp()), Some(exp));
        assert!(!claims.is_near_expiry(60));
    }

    #[test]
    fn unknown_role_is_dropped() {
        let jwt = make_jwt(r#"{"sub":"u-2","role":"superuser"}"#);
        let claims = SessionClaims::decode(&jwt).unwrap();
        assert!(claims.role.is_none());
        assert!(claims.expires_at.is_none());
        assert!(!claims.is_near_expiry(60));
    }

    #[test]
    fn expired_token_is_near_expiry() {
        let exp = Utc::now().timestamp() - 10;
        let jwt = make_jwt(&format!(r#"{{"sub":"u-3","exp":{exp}}}"#));
        assert!(SessionClaims::decode(&jwt).unwrap().is_near_expiry(60));
    }

    #[test]
    fn within_buffer_is_near_expiry() {
        let exp = Utc::now().timestamp() + 30;
        let jwt = make_jwt(&format!(r#"{{"sub":"u-3","exp":{exp}}}"#));
        assert!(SessionClaims::decode(&jwt).unwrap().is_near_expiry(60));
    }

    #[test]
    fn rejects_non_jwt() {
        let err = SessionClaims::decode("opaque-token").unwrap_err();
        assert!(err.to_string().contains("invalid JWT format"));
    }

    #[test]
    fn rejects_missing_subject() {
        let jwt = make_jwt(r#"{"name":"nobody"}"#);
        let err = SessionClaims::decode(&jwt).unwrap_err();
        assert!(err.to_string().contains("missing subject"));
    }
}
