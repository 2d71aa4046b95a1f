use anyhow::Context;
use lgx_client::ApiClient;
use lgx_config::LogixConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;
use crate::ui;

const PASSWORD_ENV: &str = "LOGIX_PASSWORD";

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: Option<String>,
    role: Option<String>,
    hub: Option<String>,
    expires_at: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &LogixConfig,
) -> anyhow::Result<()> {
    let password = resolve_password(args.password.as_deref())?;
    let client = ApiClient::new(&config.api, None).context("failed to build API client")?;

    let session = lgx_auth::login(&client, &args.email, &password).await?;
    let identity = &session.identity;
    ui::toast_success(&format!(
        "logged in as {}",
        identity.name.as_deref().unwrap_or(&identity.user_id)
    ));

    output(
        &AuthLoginResponse {
            authenticated: true,
            user_id: identity.user_id.clone(),
            name: identity.name.clone(),
            role: identity.role.map(|role| role.to_string()),
            hub: identity.hub.clone(),
            expires_at: session.expires_at.map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}

fn resolve_password(flag: Option<&str>) -> anyhow::Result<String> {
    flag.map(str::to_string)
        .or_else(|| std::env::var(PASSWORD_ENV).ok())
        .filter(|password| !password.is_empty())
        .ok_or_else(|| anyhow::anyhow!("auth login: pass --password or set {PASSWORD_ENV}"))
}

#[cfg(test)]
mod tests {
    use super::resolve_password;

    #[test]
    fn flag_password_wins() {
        assert_eq!(resolve_password(Some("s3cret")).unwrap(), "s3cret");
    }

    #[test]
    fn empty_flag_password_is_rejected() {
        // Falls through to the env var, which tests do not set.
        if std::env::var("LOGIX_PASSWORD").is_err() {
            assert!(resolve_password(Some("")).is_err());
        }
    }
}
