mod helpers;
use helpers::{spawn_router, spawn_service};
use serde_json::Value;

// =========================================================================================
// 1. NOT FOUND
// =========================================================================================

mod not_found {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_gets_json_404() {
        let base = spawn_service().await;
        let resp = reqwest::get(format!("{}/nonexistent", base)).await.unwrap();
        assert_eq!(resp.status(), 404);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["status_code"], 404);
        assert_eq!(body["path"], "/nonexistent");
    }

    #[tokio::test]
    async fn test_404_body_echoes_requested_path() {
        let base = spawn_service().await;
        let body: Value = reqwest::get(format!("{}/api/v2/users", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["path"], "/api/v2/users");
    }
}

// =========================================================================================
// 2. METHOD NOT ALLOWED
// =========================================================================================

mod method_not_allowed {
    use super::*;

    #[tokio::test]
    async fn test_post_to_info_gets_json_405() {
        let base = spawn_service().await;
        let client = reqwest::Client::new();
        let resp = client.post(format!("{}/", base)).send().await.unwrap();
        assert_eq!(resp.status(), 405);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Method Not Allowed");
        assert_eq!(body["status_code"], 405);
        assert_eq!(body["path"], "/");
    }

    #[tokio::test]
    async fn test_delete_on_health_gets_json_405() {
        let base = spawn_service().await;
        let client = reqwest::Client::new();
        let resp = client
            .delete(format!("{}/health", base))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 405);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Method Not Allowed");
        assert_eq!(body["path"], "/health");
    }
}

// =========================================================================================
// 3. UNEXPECTED FAULTS
// =========================================================================================

mod internal_faults {
    use super::*;
    use axum::{routing::get, Router};
    use devops_info_service::error;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn blow_up() -> &'static str {
        panic!("simulated handler fault");
    }

    // Same panic boundary the service router carries, around a route that
    // actually faults mid-request.
    #[tokio::test]
    async fn test_handler_panic_becomes_generic_500() {
        let app = Router::new()
            .route("/boom", get(blow_up))
            .route("/ok", get(|| async { "ok" }))
            .layer(CatchPanicLayer::custom(error::handle_panic));
        let base = spawn_router(app).await;

        let resp = reqwest::get(format!("{}/boom", base)).await.unwrap();
        assert_eq!(resp.status(), 500);

        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "An unexpected error occurred");
        assert!(
            !body.to_string().contains("simulated"),
            "panic detail must stay server-side"
        );

        // the fault is not fatal: the server keeps answering
        let resp = reqwest::get(format!("{}/ok", base)).await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}
