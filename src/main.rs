// src/main.rs
use anyhow::Result;
use budget_dashboard::{backend, database};
use clap::Parser;
use dotenvy::dotenv;

/// Budget dashboard server.
#[derive(Debug, Parser)]
#[command(name = "budget-dashboard")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8050)]
    port: u16,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let default_filter = if args.debug {
        "budget_dashboard=debug"
    } else {
        "budget_dashboard=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    // Store unreachable at startup is fatal: the process never starts serving.
    let pool = database::db::connection::get_db_pool().await?;
    database::db::migrate::run_migrations(&pool).await?;

    backend::run_server(pool, &args.host, args.port).await?;

    Ok(())
}
