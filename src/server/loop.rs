// Server loop module
// The accept loop: hand every connection off and go straight back to accept

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use super::error::ServerError;
use crate::config::AppState;
use crate::logger;

/// Shutdown grace period when no request timeout is configured
pub const DRAIN_GRACE: Duration = Duration::from_secs(30);

const DRAIN_POLL: Duration = Duration::from_millis(10);

/// Accept connections until `shutdown` is notified.
///
/// Never waits on a connection task. A failed `accept` is logged and ends
/// the loop with `ServerError::Accept`; there is no retry.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), ServerError> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => accept_connection(stream, peer_addr, &state),
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                        return Err(ServerError::Accept(e));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_server_stopped();
                return Ok(());
            }
        }
    }
}

/// Wait for live connections to finish after the accept loop has stopped.
///
/// Bounded by `performance.request_timeout` when set, `DRAIN_GRACE` otherwise.
/// Returns how many connections were still open when the wait ended.
pub async fn drain_connections(state: &AppState) -> usize {
    let grace = state
        .config
        .performance
        .request_deadline()
        .unwrap_or(DRAIN_GRACE);
    let deadline = tokio::time::Instant::now() + grace;

    let remaining = loop {
        let active = state.active_connections.load(Ordering::SeqCst);
        if active == 0 || tokio::time::Instant::now() >= deadline {
            break active;
        }
        tokio::time::sleep(DRAIN_POLL).await;
    };

    logger::log_drain(remaining);
    remaining
}
