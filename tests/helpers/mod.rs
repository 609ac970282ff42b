use std::net::SocketAddr;

use axum::Router;
use devops_info_service::{api, AppState};

/// Boots the full service on an ephemeral port and returns its base URL.
///
/// Each test gets its own listener so tests stay independent; the server
/// task lives until the test process exits.
pub async fn spawn_service() -> String {
    spawn_router(api::build_router(AppState::new())).await
}

/// Serves an arbitrary router the way the binary does.
pub async fn spawn_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("test listener has no address");

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("test server crashed");
    });

    format!("http://{}", addr)
}
