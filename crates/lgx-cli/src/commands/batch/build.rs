//! `lgx <kind> build`: select pending orders into a new or saved batch.
//!
//! Steps run in a fixed order over one reconciler session: load, search,
//! deselect, select-all toggle, select, then submit with the header fields.

use lgx_batch::{BatchDraft, Reconciler, SelectAll};
use lgx_client::ApiClient;
use lgx_core::enums::BatchKind;
use lgx_core::responses::BatchBuildResponse;
use serde_json::{Map, Value};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::batch::BuildArgs;
use crate::commands::shared::draft::{collect_fields, merge_fields};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

pub async fn handle(
    kind: BatchKind,
    args: &BuildArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = Reconciler::new(ctx.client.clone(), kind);

    // A saved batch supplies its own hub; new batches fall back to defaults.
    let fallback_hub = if args.id.is_none() {
        ctx.default_hub()
    } else {
        None
    };
    let hub = args.hub.as_deref().or(fallback_hub);
    session.load(hub, args.id.as_deref()).await?;
    tracing::debug!(
        %kind,
        hub = ?session.hub(),
        pending = session.pending().len(),
        attached = session.attached().len(),
        "batch session loaded"
    );

    if let Some(search) = &args.search {
        session.set_search(search);
    }

    for order_id in &args.deselect {
        let persisted = session
            .attached()
            .iter()
            .any(|entry| entry.order_id == *order_id && entry.persisted);
        if persisted && args.dry_run {
            ui::toast_info(&format!(
                "dry run: {order_id} is saved on the server; not removing it"
            ));
            continue;
        }
        session.deselect(order_id).await?;
    }

    if args.select_all {
        match session.toggle_select_all() {
            SelectAll::Selected(count) => ui::toast_info(&format!("selected {count} orders")),
            SelectAll::Cleared(count) => ui::toast_info(&format!("cleared {count} staged orders")),
        }
    }

    for order_id in &args.select {
        if !session.select(order_id)? {
            ui::toast_info(&format!("{order_id} is already attached"));
        }
    }

    let fields = collect_fields(&args.header)?;
    let draft = header_draft(kind, &session, fields)?;

    let created = session.batch_id().is_none();
    let submitted = if args.dry_run {
        false
    } else {
        check_header(&ctx.client, &draft).await?;
        let saved = session.submit(draft).await?;
        let totals = session.aggregate();
        ui::toast_success(&format!(
            "{kind} {} {}: {} orders, {} items, {:.2} kg",
            saved.number(),
            if created { "created" } else { "updated" },
            totals.orders,
            totals.items,
            totals.weight
        ));
        true
    };

    output(&build_response(kind, &session, submitted, created), flags.format)
}

/// Header of the batch: the saved batch's or a blank one, with `fields` on top.
fn header_draft(
    kind: BatchKind,
    session: &Reconciler<ApiClient>,
    fields: Map<String, Value>,
) -> anyhow::Result<BatchDraft> {
    let mut base = session
        .loaded()
        .map_or_else(|| BatchDraft::blank(kind, session.hub()), |saved| saved.to_draft());
    // Orders come from the session at submit time.
    base.set_orders(Vec::new());
    if fields.is_empty() {
        return Ok(base);
    }
    let id = base.id().map(str::to_string);
    let mut draft = match &base {
        BatchDraft::Manifest(manifest) => BatchDraft::Manifest(merge_fields(Some(manifest), fields)?),
        BatchDraft::Drs(drs) => BatchDraft::Drs(merge_fields(Some(drs), fields)?),
    };
    draft.set_id(id);
    Ok(draft)
}

/// Server-backed sanity checks on the header before saving.
///
/// A run sheet's agent must be an active delivery agent of its hub. A
/// manifest without any active route between its hubs is only flagged.
async fn check_header(client: &ApiClient, draft: &BatchDraft) -> anyhow::Result<()> {
    match draft {
        BatchDraft::Drs(drs) if !drs.delivery_agent.is_empty() => {
            let agents = client.delivery_agents(Some(drs.hub.as_str())).await?;
            if !agents.iter().any(|agent| agent.id == drs.delivery_agent) {
                anyhow::bail!(
                    "employee {} is not an active delivery agent at hub {}",
                    drs.delivery_agent,
                    drs.hub
                );
            }
        }
        BatchDraft::Manifest(manifest)
            if !manifest.source_hub.is_empty() && !manifest.destination_hub.is_empty() =>
        {
            let routes = client.routes_serving(&manifest.source_hub).await?;
            if !routes.iter().any(|route| route.serves(&manifest.destination_hub)) {
                ui::toast_info(&format!(
                    "no active route links {} and {}",
                    manifest.source_hub, manifest.destination_hub
                ));
            }
        }
        _ => {}
    }
    Ok(())
}

fn build_response(
    kind: BatchKind,
    session: &Reconciler<ApiClient>,
    submitted: bool,
    created: bool,
) -> BatchBuildResponse {
    BatchBuildResponse {
        kind,
        id: session.batch_id().map(str::to_string),
        submitted,
        created: submitted && created,
        totals: session.aggregate(),
        attached: session
            .attached()
            .iter()
            .map(|entry| entry.order_id.clone())
            .collect(),
        staged: session
            .staged()
            .iter()
            .map(|entry| entry.order_id.clone())
            .collect(),
        pending_remaining: session.available().len(),
    }
}

#[cfg(test)]
mod tests {
    use lgx_config::ApiConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn session(kind: BatchKind) -> Reconciler<ApiClient> {
        let client = ApiClient::new(&ApiConfig::default(), None).unwrap();
        Reconciler::new(client, kind)
    }

    #[test]
    fn new_manifest_header_takes_fields() {
        let mut fields = Map::new();
        fields.insert("sourceHub".into(), json!("hub-1"));
        fields.insert("destinationHub".into(), json!("hub-2"));
        fields.insert("loaderWeight".into(), json!(120.5));
        let draft = header_draft(BatchKind::Manifest, &session(BatchKind::Manifest), fields).unwrap();
        let BatchDraft::Manifest(manifest) = draft else {
            panic!("expected a manifest draft");
        };
        assert_eq!(manifest.source_hub, "hub-1");
        assert_eq!(manifest.destination_hub, "hub-2");
        assert!((manifest.loader_weight - 120.5).abs() < f64::EPSILON);
        assert_eq!(manifest.id, None);
    }

    #[test]
    fn blank_drs_header_without_fields() {
        let draft = header_draft(BatchKind::Drs, &session(BatchKind::Drs), Map::new()).unwrap();
        assert_eq!(draft.kind(), BatchKind::Drs);
        assert!(draft.orders().is_empty());
    }

    #[test]
    fn dry_run_response_is_not_created() {
        let response = build_response(BatchKind::Drs, &session(BatchKind::Drs), false, true);
        assert!(!response.submitted);
        assert!(!response.created);
        assert_eq!(response.id, None);
        assert_eq!(response.pending_remaining, 0);
    }
}
