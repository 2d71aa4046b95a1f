use lgx_client::ApiClient;

use crate::error::AuthError;
use crate::session::Session;

/// Exchange operator credentials for a session token and persist it.
///
/// Identity comes from the token claims when the token is a JWT, otherwise
/// from the `user` object of the login response.
///
/// # Errors
///
/// Returns `AuthError::LoginFailed` if the API rejects the credentials,
/// `AuthError::MissingToken` if the response carries no token, or a token
/// store error if the token cannot be saved.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Session, AuthError> {
    let response = client
        .login(email, password)
        .await
        .map_err(AuthError::LoginFailed)?;

    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let mut session = Session::from_token(token)?;
    if let Some(user) = response.user {
        let identity = &mut session.identity;
        if identity.user_id == "unknown" {
            identity.user_id.clone_from(&user.id);
        }
        identity.name = identity.name.take().or(user.name);
        identity.email = identity.email.take().or(user.email);
        identity.role = identity.role.or(user.role);
        identity.hub = identity
            .hub
            .take()
            .or_else(|| user.hub.as_ref().map(|hub| hub.id().to_string()));
    }

    crate::token_store::store(&session.token)?;
    tracing::info!(user_id = %session.identity.user_id, "logged in");
    Ok(session)
}
