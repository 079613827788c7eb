#![forbid(unsafe_code)]

use greenpoint_server::{
    build_router, validate_startup_config, ApiConfig, AppState, LocalJsonStore,
    DEFAULT_CLIENT_ORIGIN,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_path(name: &str, default: &str) -> PathBuf {
    PathBuf::from(env::var(name).unwrap_or_else(|_| default.to_string()))
}

fn env_list(name: &str, default: &str) -> Vec<String> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let (Ok(mut sigterm), Ok(mut sigint)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) else {
            warn!("signal handlers unavailable; falling back to ctrl-c");
            let _ = tokio::signal::ctrl_c().await;
            return;
        };
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("GREENPOINT_LOG_JSON", true) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let bind_addr = env::var("GREENPOINT_BIND").unwrap_or_else(|_| format!("0.0.0.0:{port}"));
    let environment = env::var("GREENPOINT_ENV").unwrap_or_else(|_| "development".to_string());
    let data_dir = env_path("GREENPOINT_DATA_DIR", "data");

    let api_cfg = ApiConfig {
        max_body_bytes: env_usize("GREENPOINT_MAX_BODY_BYTES", 1024 * 1024),
        cors_allowed_origins: env_list("CLIENT_URL", DEFAULT_CLIENT_ORIGIN),
        uploads_dir: env_path("GREENPOINT_UPLOADS_DIR", "public/uploads"),
        legacy_unpaginated_list: env_bool("GREENPOINT_LEGACY_LIST", false),
        ..ApiConfig::default()
    };
    validate_startup_config(&api_cfg, &bind_addr)?;

    let uploads_dir = api_cfg.uploads_dir.clone();
    let store = Arc::new(LocalJsonStore::new(data_dir.clone()));
    let state = AppState::with_config(store, api_cfg);
    let app = build_router(state);

    let addr: std::net::SocketAddr = bind_addr
        .parse()
        .map_err(|e| format!("invalid bind addr {bind_addr}: {e}"))?;
    let socket = if addr.is_ipv4() {
        tokio::net::TcpSocket::new_v4().map_err(|e| format!("socket v4 failed: {e}"))?
    } else {
        tokio::net::TcpSocket::new_v6().map_err(|e| format!("socket v6 failed: {e}"))?
    };
    socket
        .set_reuseaddr(true)
        .map_err(|e| format!("set_reuseaddr failed: {e}"))?;
    socket.bind(addr).map_err(|e| format!("bind failed: {e}"))?;
    let listener: TcpListener = socket
        .listen(1024)
        .map_err(|e| format!("listen failed: {e}"))?;
    info!(
        bind = %bind_addr,
        environment = %environment,
        data_dir = %data_dir.display(),
        uploads_dir = %uploads_dir.display(),
        "greenpoint-server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            let drain_ms = env_u64("GREENPOINT_SHUTDOWN_DRAIN_MS", 0);
            if drain_ms > 0 {
                tokio::time::sleep(Duration::from_millis(drain_ms)).await;
            }
            info!("shutdown signal received");
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
