//! healthlog server binary.
//!
//! Usage: `healthlog-server [CONFIG]` (default `healthlog.yaml`). A missing
//! default config falls back to built-in defaults.

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use healthlog_core::error::{HealthLogError, Result};
use healthlog_server::{app_state, config, router, shutdown};

#[tokio::main]
async fn main() -> ExitCode {
    let explicit = std::env::args().nth(1);
    let loaded = match &explicit {
        Some(path) => config::load_from_file(path).map(|cfg| (cfg, true)),
        None => config::load_or_default(config::DEFAULT_CONFIG_PATH),
    };

    let fallback_filter = match &loaded {
        Ok((cfg, _)) => cfg.log.filter.clone(),
        Err(_) => "info".to_string(),
    };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .init();

    let (cfg, from_file) = match loaded {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(code = e.client_code().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };
    if !from_file {
        tracing::warn!(path = config::DEFAULT_CONFIG_PATH, "config file not found, using defaults");
    }

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "healthlog-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::ServerConfig) -> Result<()> {
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .map_err(|e| HealthLogError::BadConfig(format!("server.listen: {e}")))?;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HealthLogError::Processing(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, "healthlog-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal(state))
        .await
        .map_err(|e| HealthLogError::Processing(format!("server failed: {e}")))?;

    tracing::info!("healthlog-server stopped");
    Ok(())
}
