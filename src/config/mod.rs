// Configuration module entry point
// Loads layered configuration and holds the per-process server state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{
    AccessLogFormat, Config, HttpConfig, LogLevel, LoggingConfig, PerformanceConfig, ServerConfig,
};

/// Prefix for environment overrides, e.g. `TINYSERVE_SERVER__PORT=9000`
const ENV_PREFIX: &str = "TINYSERVE";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Load configuration from specified file path (without extension)
    /// The file is optional; defaults and environment fill in the rest
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::builder()?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Configuration made of defaults only
    pub fn defaults() -> Result<Self, config::ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.root", ".")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("logging.dump_responses", true)?
            .set_default("http.server_name", "tinyserve")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
