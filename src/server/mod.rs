// Server module entry point
// Listener binding, the accept loop, per-connection tasks and signals

pub mod connection;
pub mod error;
pub mod listener;
pub mod signal;

// Rust 不允许 loop 作为模块名（关键字），改用 server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use error::ServerError;
pub use listener::create_listener;
pub use server_loop::{drain_connections, start_server_loop};
pub use signal::start_signal_handler;
