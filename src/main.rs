mod api;
mod cli;
mod config;
mod display;
mod error;
mod ranges;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            cli::commands::init().await?;
        }
        Commands::Config { show, set, reset } => {
            cli::commands::config(show, set, reset).await?;
        }
        Commands::Search { term, add, view } => {
            cli::commands::search(term, add, view).await?;
        }
        Commands::Watchlist {
            delete,
            watch,
            unwatch,
            view,
        } => {
            cli::commands::watchlist(delete, watch, unwatch, view).await?;
        }
    }

    Ok(())
}
