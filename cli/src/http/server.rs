//! HTTP服务器生命周期管理

use super::{routes::build_app, AppState};
use std::net::SocketAddr;
use std::path::Path;
use taskwise_core::api::{CliError, HttpServerConfig};
use tokio::signal;
use tracing::{info, warn};

/// 启动HTTP服务器，直到收到 Ctrl+C / SIGTERM
pub async fn start_server(config: &HttpServerConfig, state: AppState) -> Result<(), CliError> {
    if !Path::new(&config.static_dir).is_dir() {
        warn!(
            "Static directory '{}' not found; only API routes will respond",
            config.static_dir
        );
    }

    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| CliError::Config(format!("invalid listen address: {e}")))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CliError::Server(e.to_string()))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C signal");
        }
        _ = wait_for_sigterm() => {
            info!("Received SIGTERM signal");
        }
    }
    info!("Starting graceful shutdown...");
}

/// 等待 SIGTERM 信号（Unix系统）
#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!("Failed to install SIGTERM handler: {}", e);
            std::future::pending::<()>().await
        }
    }
}

/// Windows 系统不支持 SIGTERM，使用空操作
#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await
}
