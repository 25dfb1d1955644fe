//! Baitul Mal - fund-management admin client
//!
//! Main entry point for the command-line front end.

use anyhow::Context;
use baitulmal_app::utils::logging::init_tracing;
use baitulmal_app::{commands, AppContext, Cli, OutputFormat};
use baitulmal_infra::config;
use clap::Parser;
use tracing::{debug, info, warn};

#[tokio::main]
#[allow(clippy::print_stdout, clippy::print_stderr)]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => debug!(error = %e, "no .env file loaded"),
    }

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => config::apply_env(config::load_from_file(Some(path.clone()))?)?,
        None => config::load()?,
    };
    let ctx = AppContext::new_with_config(config).context("failed to initialise")?;

    let result = commands::run(&ctx, cli.command, OutputFormat::from_flag(cli.json)).await;

    for toast in ctx.toasts.drain() {
        eprintln!("{toast}");
    }

    match result {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            if let Err(clear_err) = ctx.auth.handle_unauthorized(&err) {
                warn!(error = %clear_err, "failed to clear session");
            }
            Err(anyhow::Error::new(err).context("command failed"))
        }
    }
}
