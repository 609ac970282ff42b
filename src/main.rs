use std::net::SocketAddr;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devops_info_service::{api, config::Config, AppState};

// ========================================
// MAIN ENTRY POINT
// ========================================

#[tokio::main]
async fn main() {
    let config = Config::global();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_level().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::new();
    let started_at = state.started_at;
    let app = api::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect(&format!("Failed to bind to {}", addr));

    tracing::info!("{}", startup_banner(&addr, started_at, config.debug));

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .expect("Server error");
}

/// Startup line: service name, start instant, bind address.
fn startup_banner(addr: &str, started_at: DateTime<Utc>, debug: bool) -> String {
    format!(
        "🚀 devops-info-service started at {}, listening on {} (debug={})",
        started_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        addr,
        debug
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
