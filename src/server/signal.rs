// Signal handling module
//
// Supported signals:
// - SIGTERM: Stop accepting and exit
// - SIGINT:  Stop accepting and exit (Ctrl+C)
//
// The accept loop stops at once; live connections are then drained for a
// bounded grace period (see `server_loop::drain_connections`).

use std::sync::Arc;
use tokio::sync::Notify;

use super::error::ServerError;
use crate::logger;

/// Start signal handlers (Unix only)
///
/// Registers the handlers right away so a failure surfaces at startup, then
/// spawns a task that notifies `shutdown` once on the first signal.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> Result<(), ServerError> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).map_err(ServerError::Signal)?;
    let mut sigint = signal(SignalKind::interrupt()).map_err(ServerError::Signal)?;

    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        logger::log_signal(&format!("{name} received, shutting down"));
        // notify_one stores a permit, so the loop sees it even if busy
        shutdown.notify_one();
    });

    Ok(())
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> Result<(), ServerError> {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            logger::log_signal("Ctrl+C received, shutting down");
            shutdown.notify_one();
        }
    });

    Ok(())
}
