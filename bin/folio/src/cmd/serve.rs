//! Serve command - host the built bundle locally

use std::{net::SocketAddr, path::Path};

use color_eyre::eyre::{Result, bail};

use crate::server::create_router;

/// Run the serve command.
pub async fn run(dist_dir: &Path, port: u16) -> Result<()> {
    if !dist_dir.join("index.html").is_file() {
        bail!(
            "No index.html in {}; build the frontend first (trunk build frontend/index.html)",
            dist_dir.display()
        );
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, dist = %dist_dir.display(), "serving site");
    println!("Serving {} at http://{addr}", dist_dir.display());

    axum::serve(listener, create_router(dist_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
