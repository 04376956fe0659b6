//! Logger module
//!
//! Provides logging utilities for the file server including:
//! - Server lifecycle logging
//! - Access logging in combined, common or JSON format
//! - Error and warning logging
//! - The response dump used as a diagnostic sink
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{AccessLogFormat, Config, LogLevel};
use crate::http::FileRequest;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Level used before `init` has run
const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Whether `level` passes the active filter
fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(level <= DEFAULT_LEVEL, |w| w.enabled(level))
}

/// Write to the info/access target if `level` passes the filter
fn write_info(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to the error target if `level` passes the filter
fn write_error(level: LogLevel, message: &str) {
    if !enabled(level) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, root: &Path, config: &Config) {
    let info = |message: &str| write_info(LogLevel::Info, message);
    info("======================================");
    info("tinyserve started");
    info(&format!("Listening on: http://{addr}"));
    info(&format!("Serving root: {}", root.display()));
    info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        info(&format!("Max connections: {max}"));
    }
    if let Some(secs) = config.performance.request_timeout {
        info(&format!("Request timeout: {secs}s"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        info(&format!("Error log: {path}"));
    }
    info("======================================\n");
}

pub fn log_server_stopped() {
    write_info(LogLevel::Info, "[Shutdown] Accept loop stopped");
}

pub fn log_drain(remaining: usize) {
    if remaining == 0 {
        write_info(LogLevel::Info, "[Shutdown] All connections finished");
    } else {
        write_error(
            LogLevel::Warn,
            &format!("[WARN] Shutdown grace period over, {remaining} connection(s) still open"),
        );
    }
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(
        LogLevel::Debug,
        &format!("[Connection] Accepted from: {peer_addr}"),
    );
}

pub fn log_connection_error(peer_addr: &SocketAddr, err: &impl std::fmt::Display) {
    write_error(
        LogLevel::Error,
        &format!("[ERROR] Failed to serve connection from {peer_addr}: {err}"),
    );
}

pub fn log_request(request: &FileRequest) {
    write_info(
        LogLevel::Debug,
        &format!(
            "[Request] {} {} {:?} -> '{}'",
            request.method,
            request.target,
            request.version,
            request.file_id()
        ),
    );
}

/// Echo a serialized response, body included
pub fn log_response_dump(wire: &[u8]) {
    write_info(LogLevel::Info, &response_dump_text(wire));
}

/// Dump line for a serialized response; non-UTF-8 body bytes are replaced
pub fn response_dump_text(wire: &[u8]) -> String {
    format!("[Response]\n{}", String::from_utf8_lossy(wire))
}

pub fn log_error(message: &str) {
    write_error(LogLevel::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(LogLevel::Warn, &format!("[WARN] {message}"));
}

pub fn log_signal(message: &str) {
    write_info(LogLevel::Info, &format!("[SIGNAL] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: AccessLogFormat) {
    write_info(LogLevel::Info, &entry.format(format));
}
