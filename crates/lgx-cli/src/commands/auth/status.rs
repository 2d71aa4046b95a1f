use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    hub: Option<String>,
    expires_at: Option<String>,
    token_source: Option<String>,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let token_source = lgx_auth::token_store::detect_token_source();
    let status = match lgx_auth::resolve_session()? {
        Some(session) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(session.identity.user_id),
            name: session.identity.name,
            email: session.identity.email,
            role: session.identity.role.map(|role| role.to_string()),
            hub: session.identity.hub,
            expires_at: session.expires_at.map(|at| at.to_rfc3339()),
            token_source,
        },
        None => AuthStatusResponse {
            authenticated: false,
            user_id: None,
            name: None,
            email: None,
            role: None,
            hub: None,
            expires_at: None,
            token_source,
        },
    };
    output(&status, flags.format)
}
