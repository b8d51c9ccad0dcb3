use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::features::pages::handlers::{self, PageState};
use crate::features::reports::routes::REPORT_FORM_BODY_LIMIT;

/// Create routes for the HTML pages
pub fn routes(state: PageState) -> Router {
    Router::new()
        .route("/", get(handlers::current_page))
        .route("/navigate", post(handlers::navigate))
        .route(
            "/report",
            post(handlers::submit_report).layer(DefaultBodyLimit::max(REPORT_FORM_BODY_LIMIT)),
        )
        .with_state(state)
}
