use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;
use crate::shared::constants::MAX_PHOTO_SIZE;

/// Body limit for report forms. Leaves room above the photo limit so an
/// oversized photo reaches validation instead of failing as 413.
pub const REPORT_FORM_BODY_LIMIT: usize = MAX_PHOTO_SIZE + 2 * 1024 * 1024;

/// Create routes for the reports feature
///
/// All routes need the session middleware to be applied by the caller
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports)
                .post(handlers::submit_report)
                .layer(DefaultBodyLimit::max(REPORT_FORM_BODY_LIMIT)),
        )
        .route("/api/reports/form", get(handlers::get_report_form))
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(service)
}
