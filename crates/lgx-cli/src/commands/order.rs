//! `lgx order` handlers.

use lgx_client::OrderFilter;
use lgx_core::entities::Order;
use lgx_core::enums::OrderStatus;
use lgx_core::errors::CoreError;
use lgx_core::forms::OrderDraft;
use lgx_core::refs::Identified;
use lgx_core::responses::{DeleteResponse, StatusChangeResponse};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrderCommands;
use crate::cli::subcommands::order::OrderListArgs;
use crate::commands::shared::draft::build_draft;
use crate::commands::shared::export::write_csv;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::commands::shared::search::narrow;
use crate::context::AppContext;
use crate::output::rows::OrderRow;
use crate::output::{output, output_list};
use crate::ui;

pub async fn handle(
    action: &OrderCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        OrderCommands::List(args) => {
            let filter = order_filter(args)?;
            let limit = effective_limit(args.limit, flags.limit, ctx.default_limit());
            let mut orders = client.list_orders(&filter).await?;
            narrow(&mut orders, args.search.as_deref(), limit, Order::matches_search);
            output_list::<_, OrderRow>(&orders, flags.format)
        }
        OrderCommands::Get { id } => output(&client.get_order(id).await?, flags.format),
        OrderCommands::Create(draft_args) => {
            let draft: OrderDraft = build_draft(None, draft_args)?;
            let order = client.create_order(&draft).await?;
            ui::toast_success(&format!("order {} booked", order.label()));
            output(&order, flags.format)
        }
        OrderCommands::Update { id, draft } => {
            let current = client.get_order(id).await?;
            let draft = build_draft(Some(&OrderDraft::from(&current)), draft)?;
            let order = client.update_order(id, &draft).await?;
            ui::toast_success(&format!("order {} updated", order.label()));
            output(&order, flags.format)
        }
        OrderCommands::UpdateStatus { id, status } => {
            let next: OrderStatus = parse_enum(status, "status")?;
            let current = client.get_order(id).await?;
            current.status.check_transition(&current.order_id, next)?;
            let order = client.update_order_status(id, next).await?;
            ui::toast_success(&format!(
                "order {} moved {} → {}",
                order.label(),
                current.status,
                order.status
            ));
            output(
                &StatusChangeResponse {
                    id: order.id.clone(),
                    order_id: order.order_id.clone(),
                    from: current.status,
                    to: order.status,
                },
                flags.format,
            )
        }
        OrderCommands::Delete { id } => {
            client.delete_order(id).await?;
            ui::toast_success(&format!("order {id} deleted"));
            output(
                &DeleteResponse {
                    resource: "order".to_string(),
                    id: id.clone(),
                    deleted: true,
                },
                flags.format,
            )
        }
        OrderCommands::Export { filter, output: path } => {
            let mut orders = client.list_orders(&order_filter(filter)?).await?;
            narrow(&mut orders, filter.search.as_deref(), u32::MAX, Order::matches_search);
            let rows = orders.iter().map(OrderRow::from).collect::<Vec<_>>();
            let response = write_csv(&rows, path.as_deref())?;
            if path.is_some() {
                ui::toast_success(&format!("exported {} orders", response.rows));
                output(&response, flags.format)?;
            }
            Ok(())
        }
    }
}

fn order_filter(args: &OrderListArgs) -> anyhow::Result<OrderFilter> {
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<OrderStatus>(raw, "status"))
        .transpose()?;
    let from = parse_date(args.from.as_deref(), "from")?;
    let to = parse_date(args.to.as_deref(), "to")?;
    if let (Some(from), Some(to)) = (from, to)
        && from > to
    {
        return Err(CoreError::Validation(format!("--from {from} is after --to {to}")).into());
    }
    Ok(OrderFilter {
        status,
        hub: args.hub.clone(),
        current_hub: args.current_hub.clone(),
        source_hub: args.source_hub.clone(),
        destination_hub: args.destination_hub.clone(),
        customer: args.customer.clone(),
        from,
        to,
        search: args.search.clone(),
    })
}
