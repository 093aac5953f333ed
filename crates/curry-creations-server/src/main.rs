#![forbid(unsafe_code)]

use curry_creations_server::{
    build_router, AnalyticsTracker, ApiConfig, AppState, InMemoryRepository, LoggingTracker,
    SimulatedGateway,
};
use std::env;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
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

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
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
    if env_bool("CURRY_LOG_JSON", false) {
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

    let bind_addr = env::var("CURRY_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let api_cfg = ApiConfig {
        purchase_confirm_delay: env_duration_ms("CURRY_PURCHASE_CONFIRM_DELAY_MS", 1000),
        catalog_ttl: env_duration_ms("CURRY_CATALOG_TTL_MS", 30_000),
        readiness_requires_catalog: env_bool("CURRY_READINESS_REQUIRES_CATALOG", true),
    };

    let repository = Arc::new(
        InMemoryRepository::with_sample_data().map_err(|e| format!("sample data invalid: {e}"))?,
    );
    let gateway = Arc::new(SimulatedGateway::new(api_cfg.purchase_confirm_delay));
    let analytics: Option<Arc<dyn AnalyticsTracker>> = env_bool("CURRY_ANALYTICS_ENABLED", false)
        .then(|| Arc::new(LoggingTracker) as Arc<dyn AnalyticsTracker>);

    let state = AppState::with_config(repository, gateway, analytics, api_cfg);
    state.init_analytics();
    let app = build_router(state.clone());

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
    info!("curry-creations-server listening on {bind_addr}");

    state.ready.store(true, Ordering::Relaxed);
    let state_for_shutdown = state.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            // Refuse new purchases first, then drain in-flight requests.
            state_for_shutdown.begin_shutdown_drain();
            let drain_ms = env_u64("CURRY_SHUTDOWN_DRAIN_MS", 5000);
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
