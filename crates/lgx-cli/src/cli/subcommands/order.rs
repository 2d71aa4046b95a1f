use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::DraftArgs;

/// Order commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrderCommands {
    /// List orders.
    List(OrderListArgs),
    /// Get an order by ID.
    Get { id: String },
    /// Book a new order.
    Create(DraftArgs),
    /// Edit an order.
    Update {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Move an order to its next status.
    UpdateStatus {
        id: String,
        /// Target status, e.g. `out_for_delivery`.
        status: String,
    },
    /// Delete an order.
    Delete { id: String },
    /// Export the filtered order list as CSV.
    Export {
        #[command(flatten)]
        filter: OrderListArgs,
        /// Output path (stdout when omitted).
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct OrderListArgs {
    #[arg(long)]
    pub status: Option<String>,
    /// Orders touching this hub (source, destination, or current).
    #[arg(long)]
    pub hub: Option<String>,
    #[arg(long)]
    pub current_hub: Option<String>,
    #[arg(long)]
    pub source_hub: Option<String>,
    #[arg(long)]
    pub destination_hub: Option<String>,
    #[arg(long)]
    pub customer: Option<String>,
    /// Booked on or after (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Booked on or before (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}
