use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::navigation::handlers;
use crate::features::navigation::services::NavigationService;

/// Create routes for the navigation feature
pub fn routes(service: Arc<NavigationService>) -> Router {
    Router::new()
        .route(
            "/api/navigation",
            get(handlers::get_navigation).put(handlers::navigate),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::{session_header, test_server};
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_new_session_starts_on_home() {
        let server = test_server();
        let (name, value) = session_header();

        let response = server.get("/api/navigation").add_header(name, value).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["current_page"], "home");
        assert_eq!(body["data"]["nav_items"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_last_navigation_wins() {
        let server = test_server();
        let (name, value) = session_header();

        for page in ["new_report", "incident_map", "my_reports"] {
            server
                .put("/api/navigation")
                .add_header(name.clone(), value.clone())
                .json(&json!({ "page": page }))
                .await
                .assert_status_ok();
        }

        let body: Value = server
            .get("/api/navigation")
            .add_header(name, value)
            .await
            .json();
        assert_eq!(body["data"]["current_page"], "my_reports");
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_navigation() {
        let server = test_server();
        let (name, first) = session_header();
        let (_, second) = session_header();

        server
            .put("/api/navigation")
            .add_header(name.clone(), first)
            .json(&json!({ "page": "incident_map" }))
            .await
            .assert_status_ok();

        let body: Value = server
            .get("/api/navigation")
            .add_header(name, second)
            .await
            .json();
        assert_eq!(body["data"]["current_page"], "home");
    }

    #[tokio::test]
    async fn test_unknown_page_is_rejected() {
        let server = test_server();
        let (name, value) = session_header();

        let response = server
            .put("/api/navigation")
            .add_header(name, value)
            .json(&json!({ "page": "settings" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
