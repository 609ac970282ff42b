//! HTTP surface: routes, handlers and the per-request log line.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, Method, Uri},
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use utoipa::OpenApi;

use crate::api_docs::{ApiDoc, SWAGGER_PAGE};
use crate::error::{self, ServiceError};
use crate::snapshot::{self, HealthResponse, ServiceInfo};
use crate::uptime::Uptime;
use crate::AppState;

// ========================================
// ROUTER
// ========================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/docs", get(docs))
        .route("/openapi.json", get(openapi_schema))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .with_state(state)
}

// ========================================
// HANDLERS
// ========================================

/// Main endpoint. Reports service identity, host facts, uptime and a
/// reflection of the incoming request.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service, system, runtime and request details", body = ServiceInfo)
    )
)]
pub async fn index(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<ServiceInfo> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    let request =
        snapshot::request_snapshot(Some(peer.ip()), user_agent, method.as_str(), uri.path());

    tracing::info!(
        "Request: {} {} from {}",
        request.method,
        request.path,
        request.client_ip
    );

    Json(ServiceInfo {
        service: snapshot::service_descriptor(),
        system: snapshot::system_snapshot(),
        runtime: snapshot::runtime_snapshot(state.started_at),
        request,
        endpoints: snapshot::endpoint_catalog(),
    })
}

/// Liveness probe for load balancers and orchestrators.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: snapshot::utc_now_iso(),
        uptime_seconds: Uptime::since(state.started_at).seconds,
    })
}

async fn docs() -> Html<&'static str> {
    Html(SWAGGER_PAGE)
}

async fn openapi_schema() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ========================================
// FALLBACKS
// ========================================

async fn not_found(uri: Uri) -> ServiceError {
    ServiceError::not_found(uri.path())
}

async fn method_not_allowed(uri: Uri) -> ServiceError {
    ServiceError::method_not_allowed(uri.path())
}
