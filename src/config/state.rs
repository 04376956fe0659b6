// Application state module
// Immutable per-process state shared by every connection task

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicUsize;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Canonical serving root
    pub root: PathBuf,
    /// Live connection count, maintained by `server::connection`
    pub active_connections: AtomicUsize,
}

impl AppState {
    /// Create `AppState`, resolving the serving root once up front
    pub fn new(config: Config) -> io::Result<Self> {
        let root = Path::new(&config.server.root).canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Serving root '{}' is not accessible: {e}", config.server.root),
            )
        })?;

        Ok(Self {
            config,
            root,
            active_connections: AtomicUsize::new(0),
        })
    }
}
