use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        if is_unauthorized(&error) {
            lgx_auth::handle_unauthorized();
            ui::toast_error("session expired or invalid; run `lgx auth login` again");
        } else if let Some(errors) = form_errors(&error) {
            for field in &errors.errors {
                ui::toast_error(&format!("{}: {}", field.field, field.message));
            }
        } else {
            ui::toast_error(&format!("{error:#}"));
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;

    if let cli::Commands::Auth { action } = &cli.command {
        return commands::auth::handle(action, &flags, &config).await;
    }

    let ctx = context::AppContext::init(config)?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LOGIX_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Field errors of a rejected draft, reported one toast per field.
fn form_errors(error: &anyhow::Error) -> Option<&lgx_core::forms::FormErrors> {
    error.chain().find_map(|cause| {
        cause
            .downcast_ref::<lgx_core::forms::FormErrors>()
            .or_else(|| match cause.downcast_ref::<lgx_batch::BatchError>() {
                Some(lgx_batch::BatchError::Form(errors)) => Some(errors),
                _ => None,
            })
    })
}

/// Whether any error in the chain is a 401 from the API on an authenticated
/// call. Rejected credentials during login do not count.
fn is_unauthorized(error: &anyhow::Error) -> bool {
    let login_failed = error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<lgx_auth::AuthError>(),
            Some(lgx_auth::AuthError::LoginFailed(_))
        )
    });
    !login_failed && error.chain().any(|cause| {
        cause
            .downcast_ref::<lgx_client::ApiError>()
            .is_some_and(lgx_client::ApiError::is_unauthorized)
            || cause
                .downcast_ref::<lgx_batch::BatchError>()
                .is_some_and(lgx_batch::BatchError::is_unauthorized)
            || matches!(
                cause.downcast_ref::<lgx_auth::AuthError>(),
                Some(lgx_auth::AuthError::SessionExpired)
            )
    })
}
