use anyhow::Context;
use fileserve::config::Config;
use fileserve::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    if !cfg.content_root.is_dir() {
        tracing::info!("Creating content root {}", cfg.content_root.display());
        tokio::fs::create_dir_all(&cfg.content_root)
            .await
            .with_context(|| format!("creating {}", cfg.content_root.display()))?;
    }

    tokio::select! {
        res = server::listener::run(&cfg) => {
            res.with_context(|| format!("serving on {}", cfg.listen_addr()))?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
