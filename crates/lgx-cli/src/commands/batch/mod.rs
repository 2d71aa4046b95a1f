//! `lgx manifest` / `lgx drs` handlers.

mod build;

use lgx_batch::{AttachedEntry, BatchBackend};
use lgx_client::{DrsQuery, ManifestQuery};
use lgx_core::enums::{BatchKind, DrsStatus, ManifestStatus};
use lgx_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BatchCommands;
use crate::cli::subcommands::batch::BatchListArgs;
use crate::commands::shared::export::write_csv;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::search::{matches_text, narrow};
use crate::context::AppContext;
use crate::output::rows::{AttachedRow, DrsRow, ManifestRow};
use crate::output::{output, output_list};
use crate::ui;

pub async fn handle(
    kind: BatchKind,
    action: &BatchCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        BatchCommands::List(args) => list(kind, args, ctx, flags).await,
        BatchCommands::Get { id } => match kind {
            BatchKind::Manifest => output(&client.get_manifest(id).await?, flags.format),
            BatchKind::Drs => output(&client.get_drs(id).await?, flags.format),
        },
        BatchCommands::Build(args) => build::handle(kind, args, ctx, flags).await,
        BatchCommands::RemoveOrder { id, order_id } => match kind {
            BatchKind::Manifest => {
                let manifest = client.remove_manifest_order(id, order_id).await?;
                ui::toast_success(&format!(
                    "order {order_id} removed from manifest {}",
                    manifest.manifest_id
                ));
                output(&manifest, flags.format)
            }
            BatchKind::Drs => {
                let drs = client.remove_drs_order(id, order_id).await?;
                ui::toast_success(&format!("order {order_id} removed from drs {}", drs.drs_id));
                output(&drs, flags.format)
            }
        },
        BatchCommands::Delete { id } => {
            match kind {
                BatchKind::Manifest => client.delete_manifest(id).await?,
                BatchKind::Drs => client.delete_drs(id).await?,
            }
            ui::toast_success(&format!("{kind} {id} deleted"));
            output(
                &DeleteResponse {
                    resource: kind.to_string(),
                    id: id.clone(),
                    deleted: true,
                },
                flags.format,
            )
        }
        BatchCommands::Export { id, output: path } => {
            let saved = client.fetch(kind, id).await?;
            let rows = saved
                .orders()
                .iter()
                .map(AttachedEntry::persisted)
                .map(|entry| AttachedRow::from(&entry))
                .collect::<Vec<_>>();
            let response = write_csv(&rows, path.as_deref())?;
            if path.is_some() {
                ui::toast_success(&format!(
                    "exported {} orders of {kind} {}",
                    response.rows,
                    saved.number()
                ));
                output(&response, flags.format)?;
            }
            Ok(())
        }
    }
}

async fn list(
    kind: BatchKind,
    args: &BatchListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, ctx.default_limit());
    let search = args.search.as_deref();
    match kind {
        BatchKind::Manifest => {
            let query = ManifestQuery {
                status: args
                    .status
                    .as_deref()
                    .map(|raw| parse_enum::<ManifestStatus>(raw, "status"))
                    .transpose()?,
                source_hub: args.hub.clone(),
                destination_hub: None,
                search: args.search.clone(),
            };
            let mut manifests = ctx.client.list_manifests(&query).await?;
            narrow(&mut manifests, search, limit, matches_text);
            output_list::<_, ManifestRow>(&manifests, flags.format)
        }
        BatchKind::Drs => {
            let query = DrsQuery {
                status: args
                    .status
                    .as_deref()
                    .map(|raw| parse_enum::<DrsStatus>(raw, "status"))
                    .transpose()?,
                hub: args.hub.clone(),
                delivery_agent: None,
                search: args.search.clone(),
            };
            let mut sheets = ctx.client.list_drs(&query).await?;
            narrow(&mut sheets, search, limit, matches_text);
            output_list::<_, DrsRow>(&sheets, flags.format)
        }
    }
}
