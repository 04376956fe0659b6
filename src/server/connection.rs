// Connection handling module
// One spawned task per accepted TCP connection, one request per task

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Holds one slot of the live-connection count until dropped
///
/// Dropping the guard releases the slot, so every exit path of a connection
/// task (success, error, timeout, panic) gives it back.
struct ConnectionGuard {
    state: Arc<AppState>,
}

impl ConnectionGuard {
    /// Take a slot, or `None` when `max_connections` is reached
    fn acquire(state: &Arc<AppState>) -> Option<Self> {
        // Increment first, then check, so concurrent accepts cannot overshoot
        let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

        if let Some(max_conn) = state.config.performance.max_connections {
            if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
                state.active_connections.fetch_sub(1, Ordering::SeqCst);
                return None;
            }
        }

        Some(Self {
            state: Arc::clone(state),
        })
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.state.active_connections.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Hand an accepted connection to its own task and return immediately.
///
/// Connections over the `max_connections` cap are closed without a response.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    let Some(guard) = ConnectionGuard::acquire(state) else {
        logger::log_warning(&format!(
            "Max connections reached ({}). Connection from {peer_addr} rejected.",
            state.active_connections.load(Ordering::SeqCst)
        ));
        drop(stream);
        return;
    };

    logger::log_connection_accepted(&peer_addr);
    tokio::spawn(serve_connection(stream, peer_addr, Arc::clone(state), guard));
}

/// Serve exactly one request on `stream`, then close it.
///
/// Every failure here stays with this connection: it is logged and the
/// stream is dropped, nothing propagates to the accept loop.
async fn serve_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    _guard: ConnectionGuard,
) {
    let io = TokioIo::new(stream);
    let service_state = Arc::clone(&state);

    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            handler::handle_request(req, Arc::clone(&service_state), peer_addr)
        }),
    );

    let result = match state.config.performance.request_deadline() {
        Some(deadline) => match tokio::time::timeout(deadline, conn).await {
            Ok(result) => result,
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    deadline.as_secs()
                ));
                return;
            }
        },
        None => conn.await,
    };

    if let Err(err) = result {
        logger::log_connection_error(&peer_addr, &err);
    }
}
