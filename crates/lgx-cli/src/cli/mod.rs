use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lgx` binary.
#[derive(Debug, Parser)]
#[command(name = "lgx", version, about = "Logix - logistics back-office console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only, no success toasts)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Override `api.base_url` for this invocation
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{BatchCommands, MasterCommands, OrderCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "lgx", "--format", "json", "--limit", "10", "--verbose", "order", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Order {
                action: OrderCommands::List(_)
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lgx", "hub", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Hub {
                action: MasterCommands::List(_)
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lgx", "--format", "xml", "order", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn manifest_build_collects_repeated_selections() {
        let cli = Cli::try_parse_from([
            "lgx",
            "manifest",
            "build",
            "--id",
            "m-1",
            "--select",
            "o-1",
            "--select",
            "o-2",
            "--deselect",
            "o-9",
            "--select-all",
            "--search",
            "pune",
            "--dry-run",
        ])
        .expect("cli should parse");

        let Commands::Manifest {
            action: BatchCommands::Build(args),
        } = cli.command
        else {
            panic!("expected manifest build");
        };
        assert_eq!(args.id.as_deref(), Some("m-1"));
        assert_eq!(args.select, vec!["o-1", "o-2"]);
        assert_eq!(args.deselect, vec!["o-9"]);
        assert!(args.select_all);
        assert!(args.dry_run);
        assert_eq!(args.search.as_deref(), Some("pune"));
    }

    #[test]
    fn draft_fields_accept_repeated_set() {
        let cli = Cli::try_parse_from([
            "lgx", "loader", "update", "l-1", "--set", "phone=9876543210", "--set",
            "isActive:=false",
        ])
        .expect("cli should parse");
        let Commands::Loader {
            action: MasterCommands::Update { id, draft },
        } = cli.command
        else {
            panic!("expected loader update");
        };
        assert_eq!(id, "l-1");
        assert_eq!(draft.set.len(), 2);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["lgx", "--api-url", "http://ops.local/api", "auth", "status"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.api_url.as_deref(), Some("http://ops.local/api"));
    }
}
