use std::path::PathBuf;

use clap::Args;

/// Form input for create/update commands.
///
/// Fields come from a JSON file (or `-` for stdin) and/or `--set key=value`
/// pairs, applied in that order over the current values when updating.
#[derive(Clone, Debug, Default, Args)]
pub struct DraftArgs {
    /// JSON file with draft fields (`-` reads stdin).
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Set one field, e.g. `--set phone=9876543210` or `--set isActive:=false`.
    #[arg(long = "set", value_name = "KEY=VALUE|KEY:=JSON")]
    pub set: Vec<String>,
}
