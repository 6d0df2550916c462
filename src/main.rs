use anyhow::Context;

use fileserve::config::Config;
use fileserve::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load().context("invalid configuration")?;
    tracing::info!(root = ?cfg.root_directory, "Serving files");

    tokio::select! {
        res = server::run(cfg) => {
            res.context("server stopped")?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
