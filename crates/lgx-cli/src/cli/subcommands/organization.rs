use clap::Subcommand;

use super::DraftArgs;

/// Organization profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrganizationCommands {
    /// Show the organization profile.
    Get,
    /// Update the organization profile.
    Update(DraftArgs),
}
