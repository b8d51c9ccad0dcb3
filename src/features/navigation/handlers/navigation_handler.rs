use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::core::session::Session;
use crate::features::navigation::dtos::{NavigateDto, NavigationResponseDto};
use crate::features::navigation::services::NavigationService;
use crate::shared::types::ApiResponse;

/// Get the session's current page and navigation bar
#[utoipa::path(
    get,
    path = "/api/navigation",
    tag = "navigation",
    responses(
        (status = 200, description = "Current page", body = ApiResponse<NavigationResponseDto>)
    )
)]
pub async fn get_navigation(
    session: Session,
    State(service): State<Arc<NavigationService>>,
) -> Result<Json<ApiResponse<NavigationResponseDto>>> {
    let ctx = session.context.lock().await;
    let response = service.describe(ctx.current_page());
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Move the session to another page
///
/// Unknown page identifiers are rejected with 400.
#[utoipa::path(
    put,
    path = "/api/navigation",
    tag = "navigation",
    request_body = NavigateDto,
    responses(
        (status = 200, description = "Page changed", body = ApiResponse<NavigationResponseDto>),
        (status = 400, description = "Unknown page identifier")
    )
)]
pub async fn navigate(
    session: Session,
    State(service): State<Arc<NavigationService>>,
    AppJson(dto): AppJson<NavigateDto>,
) -> Result<Json<ApiResponse<NavigationResponseDto>>> {
    let mut ctx = session.context.lock().await;
    let response = service.go_to(&mut ctx, dto.page);
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}
