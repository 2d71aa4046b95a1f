use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `lgx auth login`")]
    NotAuthenticated,

    #[error("session expired — run `lgx auth login` again")]
    SessionExpired,

    #[error("login failed: {0}")]
    LoginFailed(#[source] lgx_client::ApiError),

    #[error("login response did not contain a token")]
    MissingToken,

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
