use clap::{Args, Subcommand};

use super::DraftArgs;

/// Commands shared by the master-data resources (hubs, employees,
/// customers, loaders, routes).
#[derive(Clone, Debug, Subcommand)]
pub enum MasterCommands {
    /// List records.
    List(MasterListArgs),
    /// Get a record by ID.
    Get { id: String },
    /// Create a record.
    Create(DraftArgs),
    /// Update a record.
    Update {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a record.
    Delete { id: String },
}

#[derive(Clone, Debug, Default, Args)]
pub struct MasterListArgs {
    /// Free-text search.
    #[arg(long)]
    pub search: Option<String>,
    /// Only records of this hub.
    #[arg(long)]
    pub hub: Option<String>,
    /// Employee role filter.
    #[arg(long)]
    pub role: Option<String>,
    /// Active (true) or inactive (false) records only.
    #[arg(long)]
    pub active: Option<bool>,
    #[arg(long)]
    pub limit: Option<u32>,
}
