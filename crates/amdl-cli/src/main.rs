//! CLI entry point.
//!
//! Parses arguments, composes the context and dispatches. Exit codes come
//! from `BootstrapError::exit_code` or, after a launch, from the server.

use std::process::ExitCode;

use amdl_cli::{Cli, CliConfig, Commands, compose, exit, handlers, presentation};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> i32 {
    let ctx = match compose(CliConfig::from_cli(&cli)) {
        Ok(ctx) => ctx,
        Err(e) => {
            presentation::report_error(&e);
            return e.exit_code();
        }
    };

    match cli.command.unwrap_or(Commands::Start) {
        Commands::Start => {
            let result = handlers::start::execute(&ctx).await;
            match &result {
                Ok(outcome) if !outcome.is_success() => {
                    eprintln!("Web server exited with code {}", outcome.exit_code());
                }
                Ok(_) => {}
                Err(e) => presentation::report_error(e),
            }
            exit::start_status(&result)
        }
        Commands::CheckDeps => {
            let result = handlers::check_deps::execute(ctx.probe.as_ref());
            if let Err(e) = &result {
                tracing::debug!("check-deps failed: {e:#}");
            }
            exit::check_deps_status(result.is_ok())
        }
        Commands::Paths { json } => {
            let result = handlers::paths::execute(&ctx.layout, json);
            if let Err(e) = &result {
                eprintln!("❌ {e:#}");
            }
            exit::paths_status(result.is_ok())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    ExitCode::from(exit::status_byte(run(cli).await))
}
