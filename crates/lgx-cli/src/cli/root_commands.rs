use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, BatchCommands, MasterCommands, OrderCommands, OrganizationCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, show the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Orders (consignments).
    Order {
        #[command(subcommand)]
        action: OrderCommands,
    },
    /// Hubs.
    Hub {
        #[command(subcommand)]
        action: MasterCommands,
    },
    /// Employees.
    Employee {
        #[command(subcommand)]
        action: MasterCommands,
    },
    /// Customers.
    Customer {
        #[command(subcommand)]
        action: MasterCommands,
    },
    /// Loaders (vehicle operators).
    Loader {
        #[command(subcommand)]
        action: MasterCommands,
    },
    /// Hub-to-hub routes.
    Route {
        #[command(subcommand)]
        action: MasterCommands,
    },
    /// Organization profile.
    Organization {
        #[command(subcommand)]
        action: OrganizationCommands,
    },
    /// Inter-hub manifests.
    Manifest {
        #[command(subcommand)]
        action: BatchCommands,
    },
    /// Delivery run sheets.
    Drs {
        #[command(subcommand)]
        action: BatchCommands,
    },
}
