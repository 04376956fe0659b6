//! tinyserve: a one-request-per-connection HTTP file server.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

#[cfg(test)]
mod testutil;
