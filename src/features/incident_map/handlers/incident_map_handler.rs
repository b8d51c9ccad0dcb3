use axum::Json;

use crate::core::error::Result;
use crate::features::incident_map::dtos::IncidentMapResponseDto;
use crate::shared::types::ApiResponse;

/// Incident map placeholder
///
/// Always reports the map as unavailable: no backend is configured.
#[utoipa::path(
    get,
    path = "/api/incident-map",
    tag = "incident-map",
    responses(
        (status = 200, description = "Map availability", body = ApiResponse<IncidentMapResponseDto>)
    )
)]
pub async fn get_incident_map() -> Result<Json<ApiResponse<IncidentMapResponseDto>>> {
    let response = IncidentMapResponseDto::unavailable();
    let message = Some(response.message.clone());
    Ok(Json(ApiResponse::success(Some(response), message, None)))
}
