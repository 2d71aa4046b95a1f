mod login;
mod logout;
mod status;

use lgx_config::LogixConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Auth commands run without an existing session.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &LogixConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags),
        AuthCommands::Status => status::handle(flags),
    }
}
