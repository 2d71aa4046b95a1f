use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::DraftArgs;

/// Commands shared by manifests and delivery run sheets.
#[derive(Clone, Debug, Subcommand)]
pub enum BatchCommands {
    /// List batches.
    List(BatchListArgs),
    /// Get a batch by ID.
    Get { id: String },
    /// Create a batch or edit a saved one by selecting pending orders.
    Build(BuildArgs),
    /// Detach one order from a saved batch.
    RemoveOrder { id: String, order_id: String },
    /// Delete a batch.
    Delete { id: String },
    /// Export a batch's orders as CSV.
    Export {
        id: String,
        /// Output path (stdout when omitted).
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Default, Args)]
pub struct BatchListArgs {
    #[arg(long)]
    pub status: Option<String>,
    /// Source hub (manifests) or delivering hub (run sheets).
    #[arg(long)]
    pub hub: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Default, Args)]
pub struct BuildArgs {
    /// Saved batch to edit; a new batch is created when omitted.
    #[arg(long)]
    pub id: Option<String>,
    /// Hub whose pending orders are listed (defaults to the batch's hub,
    /// then `general.default_hub`, then the operator's hub).
    #[arg(long)]
    pub hub: Option<String>,
    /// Filter pending orders (docket, names, phone, pincode, city).
    #[arg(long)]
    pub search: Option<String>,
    /// Attach a pending order by ID (repeatable).
    #[arg(long, value_name = "ORDER_ID")]
    pub select: Vec<String>,
    /// Detach an order by ID (repeatable).
    #[arg(long, value_name = "ORDER_ID")]
    pub deselect: Vec<String>,
    /// Toggle selection of every filtered pending order.
    #[arg(long)]
    pub select_all: bool,
    /// Show the resulting selection without saving.
    #[arg(long)]
    pub dry_run: bool,
    /// Header fields (destination, vehicle, loader weight, agent).
    #[command(flatten)]
    pub header: DraftArgs,
}
