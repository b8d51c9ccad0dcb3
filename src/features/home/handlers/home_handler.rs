use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::home::dtos::HomeResponseDto;
use crate::features::home::services::HomeService;
use crate::shared::types::ApiResponse;

/// Quick links and highlights for the home screen
#[utoipa::path(
    get,
    path = "/api/home",
    tag = "home",
    responses(
        (status = 200, description = "Home content", body = ApiResponse<HomeResponseDto>)
    )
)]
pub async fn get_home(
    State(service): State<Arc<HomeService>>,
) -> Result<Json<ApiResponse<HomeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(service.home()), None, None)))
}
