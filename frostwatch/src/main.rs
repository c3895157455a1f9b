// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! frostwatch: live temperature dashboard in the terminal.
//!
//! Run with:  `RUST_LOG=info frostwatch`

use anyhow::Result;
use frostwatch::widgets::Surface;
use frostwatch::{Dashboard, DashboardConfig};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("frostwatch v{} starting", env!("CARGO_PKG_VERSION"));

    let config = DashboardConfig::load(DashboardConfig::default_path())?;
    let mut dashboard = Dashboard::build(&config, Surface::stdout())?;
    println!("{}", dashboard.banner());

    let shutdown = CancellationToken::new();
    let on_ctrl_c = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Ctrl+C received, shutting down"),
            Err(e) => tracing::error!("cannot listen for Ctrl+C: {e}"),
        }
        on_ctrl_c.cancel();
    });

    let summary = dashboard.run(&shutdown).await;
    tracing::info!(
        "{} tick(s) rendered, {} skipped",
        summary.ticks,
        summary.failed_ticks
    );
    Ok(())
}
