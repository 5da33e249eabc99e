//! Server entry point.
//!
//! # Responsibility
//! - Parse configuration, initialize logging and open the database.
//! - Serve the REST router until Ctrl-C.

mod config;

use anyhow::{anyhow, Context};
use clap::Parser;
use config::Config;
use log::{info, warn};
use staffroll_api::{router, AppState};
use staffroll_core::db::{open_db, open_db_in_memory};
use staffroll_core::{core_version, init_logging};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_logging(&config.log_level, config.log_dir.as_deref())
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    let conn = if config.uses_in_memory_db() {
        open_db_in_memory()
    } else {
        open_db(&config.db_path)
    }
    .with_context(|| format!("failed to open database {}", config.db_path))?;

    let app = router(AppState::new(conn));
    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    let local_addr = listener.local_addr()?;

    info!(
        "event=server_start module=cli status=ok addr={} db_path={} version={}",
        local_addr,
        config.db_path,
        core_version()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("event=server_stop module=cli status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=cli status=error error={err}");
        std::future::pending::<()>().await;
    }
}
