//! Process plumbing shared by the three service binaries: tracing setup
//! and the HTTP serve loop with graceful shutdown.
//!
//! Log levels are configured via the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run --bin user-service
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run --bin user-service
//! ```

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal::{
    ctrl_c,
    unix::{signal, SignalKind},
};
use tracing::info;

/// Initializes structured logging for the process.
///
/// Uses a compact format that hides the crate/module prefix; the collection
/// actors log a `record_type` field instead, which keeps lines short while
/// still saying which store an event came from.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Binds the fixed service port and serves the router until shutdown.
pub async fn serve(app: Router, port: u16) -> std::io::Result<()> {
    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
