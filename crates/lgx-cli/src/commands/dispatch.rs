use lgx_core::enums::BatchKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::master::{Customers, Employees, Hubs, Loaders, Routes};
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Order { action } => commands::order::handle(&action, ctx, flags).await,
        Commands::Hub { action } => commands::master::handle::<Hubs>(&action, ctx, flags).await,
        Commands::Employee { action } => {
            commands::master::handle::<Employees>(&action, ctx, flags).await
        }
        Commands::Customer { action } => {
            commands::master::handle::<Customers>(&action, ctx, flags).await
        }
        Commands::Loader { action } => commands::master::handle::<Loaders>(&action, ctx, flags).await,
        Commands::Route { action } => commands::master::handle::<Routes>(&action, ctx, flags).await,
        Commands::Organization { action } => {
            commands::organization::handle(&action, ctx, flags).await
        }
        Commands::Manifest { action } => {
            commands::batch::handle(BatchKind::Manifest, &action, ctx, flags).await
        }
        Commands::Drs { action } => commands::batch::handle(BatchKind::Drs, &action, ctx, flags).await,
        Commands::Auth { .. } => unreachable!("auth is pre-dispatched in main"),
    }
}
