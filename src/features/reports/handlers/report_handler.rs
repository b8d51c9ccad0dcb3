use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::session::Session;
use crate::features::reports::dtos::{
    ReportFormDto, ReportResponseDto, ReportSummaryDto, SubmitReportDto, SubmitReportFormDto,
    SubmitReportResponseDto,
};
use crate::features::reports::models::PhotoUpload;
use crate::features::reports::services::{ReportService, EMPTY_REPORTS_MESSAGE};
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::PROTOCOL_CODE_REGEX;

/// Read the report form fields from a multipart body.
///
/// Unknown fields are ignored. A photo part with no file name and no bytes
/// (what browsers send when nothing was picked) counts as no photo.
pub async fn read_report_form(mut multipart: Multipart) -> Result<SubmitReportDto> {
    let mut dto = SubmitReportDto::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "photo" => {
                let content_type = field.content_type().map(|s| s.to_string());
                let file_name = field.file_name().unwrap_or("").to_string();

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;

                if file_name.is_empty() && data.is_empty() {
                    continue;
                }

                dto.photo = Some(PhotoUpload {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "category" | "description" | "latitude" | "longitude" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read {} field: {}", field_name, e))
                })?;
                match field_name.as_str() {
                    "category" => dto.category = text,
                    "description" => dto.description = Some(text),
                    "latitude" => dto.latitude = text,
                    _ => dto.longitude = text,
                }
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok(dto)
}

/// Submit an incident report
///
/// Accepts multipart/form-data. Without a configured backend the report is
/// kept in the session only (demonstration mode). On success the session
/// moves to the "my reports" page.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body(
        content = SubmitReportFormDto,
        content_type = "multipart/form-data",
        description = "Report form with category, coordinates, optional description and photo",
    ),
    responses(
        (status = 201, description = "Report recorded", body = ApiResponse<SubmitReportResponseDto>),
        (status = 400, description = "Validation error (missing coordinates, file too large, invalid format)"),
        (status = 502, description = "Configured backend rejected the report")
    )
)]
pub async fn submit_report(
    session: Session,
    State(service): State<Arc<ReportService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<SubmitReportResponseDto>>)> {
    let dto = read_report_form(multipart).await?;

    let mut ctx = session.context.lock().await;
    let response = service.submit(&mut ctx, dto).await?;
    let message = response.notices.first().cloned();

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), message, None)),
    ))
}

/// List reports submitted in this session, oldest first
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Session reports", body = ApiResponse<Vec<ReportSummaryDto>>)
    )
)]
pub async fn list_reports(
    session: Session,
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<Vec<ReportSummaryDto>>>> {
    let ctx = session.context.lock().await;
    let reports = service.list(&ctx);

    let total = reports.len() as i64;
    let message = reports
        .is_empty()
        .then(|| EMPTY_REPORTS_MESSAGE.to_string());

    Ok(Json(ApiResponse::success(
        Some(reports),
        message,
        Some(Meta { total }),
    )))
}

/// Get one report of this session, by ID or by protocol code
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    tag = "reports",
    params(
        ("id" = String, Path, description = "Report ID (e.g. demo_1) or protocol code (e.g. DEMO-A1B2C3)")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<ReportResponseDto>),
        (status = 404, description = "Report not found in this session")
    )
)]
pub async fn get_report(
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ReportResponseDto>>> {
    let by_protocol = PROTOCOL_CODE_REGEX.is_match(&id);

    let ctx = session.context.lock().await;
    let report = ctx
        .reports()
        .iter()
        .find(|r| {
            if by_protocol {
                r.protocol.as_str() == id
            } else {
                r.id == id
            }
        })
        .map(ReportResponseDto::from)
        .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

    Ok(Json(ApiResponse::success(Some(report), None, None)))
}

/// Report form metadata
#[utoipa::path(
    get,
    path = "/api/reports/form",
    tag = "reports",
    responses(
        (status = 200, description = "Categories, limits and backend notices", body = ApiResponse<ReportFormDto>)
    )
)]
pub async fn get_report_form(
    State(service): State<Arc<ReportService>>,
) -> Result<Json<ApiResponse<ReportFormDto>>> {
    Ok(Json(ApiResponse::success(Some(service.form()), None, None)))
}
