use lgx_client::ApiError;
use lgx_core::forms::OrganizationDraft;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrganizationCommands;
use crate::commands::shared::draft::{apply_fields, collect_fields};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub async fn handle(
    action: &OrganizationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrganizationCommands::Get => output(&ctx.client.get_organization().await?, flags.format),
        OrganizationCommands::Update(args) => {
            // First-time setup: there is no profile to start from yet.
            let base = match ctx.client.get_organization().await {
                Ok(current) => Some(OrganizationDraft::from(&current)),
                Err(ApiError::NotFound { .. }) => None,
                Err(error) => return Err(error.into()),
            };
            let fields = collect_fields(args)?;
            if fields.is_empty() {
                anyhow::bail!("nothing to update: pass --file or at least one --set");
            }
            let draft = apply_fields(base.as_ref(), fields)?;
            let organization = ctx.client.update_organization(&draft).await?;
            ui::toast_success("organization profile saved");
            output(&organization, flags.format)
        }
    }
}
