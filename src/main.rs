use std::sync::Arc;
use tokio::sync::Notify;

use tinyserve::config::{AppState, Config};
use tinyserve::logger;
use tinyserve::server::{self, ServerError};

/// Config file used when none is given on the command line (extension optional)
const DEFAULT_CONFIG: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    // 创建 Tokio 运行时，根据 workers 配置设置线程数
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers.filter(|w| *w > 0) {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr().map_err(ServerError::InvalidAddress)?;
    let listener = server::create_listener(addr)
        .inspect_err(|e| logger::log_error(&e.to_string()))?;
    let state = Arc::new(AppState::new(cfg)?);

    logger::log_server_start(&listener.local_addr()?, &state.root, &state.config);

    let shutdown = Arc::new(Notify::new());
    server::start_signal_handler(Arc::clone(&shutdown))?;

    server::start_server_loop(listener, Arc::clone(&state), shutdown).await?;
    server::drain_connections(&state).await;
    Ok(())
}
