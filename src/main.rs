use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsdesk::app::AppContext;
use newsdesk::cli::{commands, shell, Cli, Commands};
use newsdesk::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);

    let ctx = AppContext::new(config)?;

    match cli.command() {
        Commands::Browse { pages } => {
            commands::browse(&ctx, pages).await?;
        }
        Commands::Search { query } => {
            commands::search(&ctx, &query).await?;
        }
        Commands::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell::run(&ctx.controller, stdin, &mut io::stdout()).await?;
        }
    }

    Ok(())
}
