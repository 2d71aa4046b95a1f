use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    lgx_auth::logout()?;
    ui::toast_success("logged out");
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
