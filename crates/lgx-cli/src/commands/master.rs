//! `lgx hub|employee|customer|loader|route` handlers.
//!
//! The five master-data resources share one command shape; [`MasterResource`]
//! binds each to its client calls, draft type, and table row.

use lgx_client::{ApiClient, ApiError, ListQuery};
use lgx_core::entities::{Customer, Employee, Hub, Loader, Route};
use lgx_core::enums::EmployeeRole;
use lgx_core::forms::{CustomerDraft, EmployeeDraft, Form, HubDraft, LoaderDraft, RouteDraft};
use lgx_core::refs::Identified;
use lgx_core::responses::DeleteResponse;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MasterCommands;
use crate::cli::subcommands::master::MasterListArgs;
use crate::commands::shared::draft::build_draft;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::search::{matches_text, narrow};
use crate::context::AppContext;
use crate::output::rows::{CustomerRow, EmployeeRow, HubRow, LoaderRow, RouteRow};
use crate::output::{output, output_list};
use crate::ui;

pub trait MasterResource {
    /// Singular name used in toasts and delete responses.
    const NAME: &'static str;

    type Entity: Serialize + Identified;
    type Draft: Form + Serialize + DeserializeOwned + for<'a> From<&'a Self::Entity>;
    type Row: Serialize + for<'a> From<&'a Self::Entity>;

    async fn list(client: &ApiClient, query: &ListQuery) -> Result<Vec<Self::Entity>, ApiError>;
    async fn get(client: &ApiClient, id: &str) -> Result<Self::Entity, ApiError>;
    async fn create(client: &ApiClient, draft: &Self::Draft) -> Result<Self::Entity, ApiError>;
    async fn update(
        client: &ApiClient,
        id: &str,
        draft: &Self::Draft,
    ) -> Result<Self::Entity, ApiError>;
    async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError>;
}

macro_rules! master_resource {
    ($marker:ident, $name:literal, $entity:ty, $draft:ty, $row:ty,
     $list:ident, $get:ident, $create:ident, $update:ident, $delete:ident) => {
        pub struct $marker;

        impl MasterResource for $marker {
            const NAME: &'static str = $name;
            type Entity = $entity;
            type Draft = $draft;
            type Row = $row;

            async fn list(client: &ApiClient, query: &ListQuery) -> Result<Vec<$entity>, ApiError> {
                client.$list(query).await
            }

            async fn get(client: &ApiClient, id: &str) -> Result<$entity, ApiError> {
                client.$get(id).await
            }

            async fn create(client: &ApiClient, draft: &$draft) -> Result<$entity, ApiError> {
                client.$create(draft).await
            }

            async fn update(
                client: &ApiClient,
                id: &str,
                draft: &$draft,
            ) -> Result<$entity, ApiError> {
                client.$update(id, draft).await
            }

            async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
                client.$delete(id).await
            }
        }
    };
}

master_resource!(Hubs, "hub", Hub, HubDraft, HubRow, list_hubs, get_hub, create_hub, update_hub, delete_hub);
master_resource!(
    Employees, "employee", Employee, EmployeeDraft, EmployeeRow,
    list_employees, get_employee, create_employee, update_employee, delete_employee
);
master_resource!(
    Customers, "customer", Customer, CustomerDraft, CustomerRow,
    list_customers, get_customer, create_customer, update_customer, delete_customer
);
master_resource!(
    Loaders, "loader", Loader, LoaderDraft, LoaderRow,
    list_loaders, get_loader, create_loader, update_loader, delete_loader
);
master_resource!(
    Routes, "route", Route, RouteDraft, RouteRow,
    list_routes, get_route, create_route, update_route, delete_route
);

pub async fn handle<R: MasterResource>(
    action: &MasterCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = &ctx.client;
    match action {
        MasterCommands::List(args) => {
            let query = list_query(args)?;
            let limit = effective_limit(args.limit, flags.limit, ctx.default_limit());
            let mut items = R::list(client, &query).await?;
            narrow(&mut items, args.search.as_deref(), limit, matches_text);
            output_list::<R::Entity, R::Row>(&items, flags.format)
        }
        MasterCommands::Get { id } => {
            let item = R::get(client, id).await?;
            output(&item, flags.format)
        }
        MasterCommands::Create(draft_args) => {
            let draft: R::Draft = build_draft(None, draft_args)?;
            let created = R::create(client, &draft).await?;
            ui::toast_success(&format!("{} {} created", R::NAME, created.label()));
            output(&created, flags.format)
        }
        MasterCommands::Update { id, draft } => {
            let current = R::get(client, id).await?;
            let base = R::Draft::from(&current);
            let draft = build_draft(Some(&base), draft)?;
            let updated = R::update(client, id, &draft).await?;
            ui::toast_success(&format!("{} {} updated", R::NAME, updated.label()));
            output(&updated, flags.format)
        }
        MasterCommands::Delete { id } => {
            R::delete(client, id).await?;
            ui::toast_success(&format!("{} {id} deleted", R::NAME));
            output(
                &DeleteResponse {
                    resource: R::NAME.to_string(),
                    id: id.clone(),
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}

fn list_query(args: &MasterListArgs) -> anyhow::Result<ListQuery> {
    let role = args
        .role
        .as_deref()
        .map(|raw| parse_enum::<EmployeeRole>(raw, "role"))
        .transpose()?;
    Ok(ListQuery {
        search: args.search.clone(),
        hub: args.hub.clone(),
        role,
        active: args.active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_parses_role() {
        let args = MasterListArgs {
            role: Some("hub-manager".into()),
            active: Some(true),
            ..MasterListArgs::default()
        };
        let query = list_query(&args).unwrap();
        assert_eq!(query.role, Some(EmployeeRole::HubManager));
        assert_eq!(query.active, Some(true));
    }

    #[test]
    fn list_query_rejects_unknown_role() {
        let args = MasterListArgs {
            role: Some("janitor".into()),
            ..MasterListArgs::default()
        };
        assert!(list_query(&args).is_err());
    }
}
