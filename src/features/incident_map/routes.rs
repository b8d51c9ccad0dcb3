use axum::{routing::get, Router};

use crate::features::incident_map::handlers;

/// Create routes for the incident map placeholder
pub fn routes() -> Router {
    Router::new().route("/api/incident-map", get(handlers::get_incident_map))
}

#[cfg(test)]
mod tests {
    use crate::shared::test_helpers::test_server;
    use serde_json::Value;

    #[tokio::test]
    async fn test_incident_map_is_unavailable() {
        let server = test_server();

        let response = server.get("/api/incident-map").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["available"], false);
        assert_eq!(
            body["data"]["message"],
            "Ocorrências não configuradas sem banco de dados."
        );
    }
}
