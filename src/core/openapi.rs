use utoipa::{Modify, OpenApi};

use crate::features::home::{dtos as home_dtos, handlers as home_handlers};
use crate::features::incident_map::{dtos as incident_map_dtos, handlers as incident_map_handlers};
use crate::features::navigation::{
    dtos as navigation_dtos, handlers as navigation_handlers, models as navigation_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Navigation (session)
        navigation_handlers::get_navigation,
        navigation_handlers::navigate,
        // Reports (session)
        reports_handlers::submit_report,
        reports_handlers::list_reports,
        reports_handlers::get_report_form,
        reports_handlers::get_report,
        // Home (public)
        home_handlers::get_home,
        // Incident map (public)
        incident_map_handlers::get_incident_map,
    ),
    components(
        schemas(
            Meta,
            // Navigation
            navigation_models::Page,
            navigation_dtos::NavigateDto,
            navigation_dtos::NavItemDto,
            navigation_dtos::NavigationResponseDto,
            ApiResponse<navigation_dtos::NavigationResponseDto>,
            // Reports
            reports_models::ReportCategory,
            reports_models::ReportStatus,
            reports_models::PhotoExtension,
            reports_dtos::SubmitReportFormDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::ReportSummaryDto,
            reports_dtos::SubmitReportResponseDto,
            reports_dtos::CategoryOptionDto,
            reports_dtos::ReportFormDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<reports_dtos::SubmitReportResponseDto>,
            ApiResponse<reports_dtos::ReportFormDto>,
            ApiResponse<Vec<reports_dtos::ReportSummaryDto>>,
            // Home
            home_dtos::QuickLinkDto,
            home_dtos::HighlightDto,
            home_dtos::HomeResponseDto,
            ApiResponse<home_dtos::HomeResponseDto>,
            // Incident map
            incident_map_dtos::IncidentMapResponseDto,
            ApiResponse<incident_map_dtos::IncidentMapResponseDto>,
        )
    ),
    tags(
        (name = "navigation", description = "Current page and bottom navigation bar (per session)"),
        (name = "reports", description = "Incident report submission and session history"),
        (name = "home", description = "Landing page content (public)"),
        (name = "incident-map", description = "Incident map placeholder (public)"),
    ),
    info(
        title = "Comunica Guarulhos API",
        version = "0.1.0",
        description = "API documentation for Comunica Guarulhos",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_public_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/navigation",
            "/api/reports",
            "/api/reports/form",
            "/api/reports/{id}",
            "/api/home",
            "/api/incident-map",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}
