use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{
    PhotoExtension, PhotoUpload, ReportCategory, ReportRecord, ReportStatus,
};

/// Raw report form, as read from the request
#[derive(Debug, Clone, Default, Validate)]
pub struct SubmitReportDto {
    /// Category slug or display label
    pub category: String,

    #[validate(length(max = 300, message = "Description must not exceed 300 characters"))]
    pub description: Option<String>,

    pub latitude: String,

    pub longitude: String,

    pub photo: Option<PhotoUpload>,
}

/// Report form request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct SubmitReportFormDto {
    /// Category slug or display label
    #[schema(example = "Buraco na Via / Asfalto")]
    pub category: String,
    /// Optional description (max 300 characters)
    #[schema(example = "Buraco grande na esquina da Rua X com a Avenida Y, em frente à escola.")]
    pub description: Option<String>,
    #[schema(example = "-23.456")]
    pub latitude: String,
    #[schema(example = "-46.543")]
    pub longitude: String,
    /// Optional photo (jpg, jpeg or png, max 5MB)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub photo: Option<String>,
}

/// Full report record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: String,
    pub category: ReportCategory,
    pub category_label: String,
    pub description: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub photo_url: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub status_label: String,
    pub protocol: String,
}

impl From<&ReportRecord> for ReportResponseDto {
    fn from(r: &ReportRecord) -> Self {
        Self {
            id: r.id.clone(),
            category: r.category,
            category_label: r.category.label().to_string(),
            description: r.description.clone(),
            latitude: r.latitude.clone(),
            longitude: r.longitude.clone(),
            photo_url: r.photo_url.clone(),
            submitted_at: r.submitted_at,
            status: r.status,
            status_label: r.status.label().to_string(),
            protocol: r.protocol.to_string(),
        }
    }
}

/// Report as shown in the "my reports" list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportSummaryDto {
    pub id: String,
    pub category_label: String,
    pub status: ReportStatus,
    pub status_label: String,
    pub protocol: String,
    /// First 70 characters of the description
    pub description_excerpt: Option<String>,
    /// Submission date, YYYY-MM-DD
    pub date: String,
    pub photo_url: Option<String>,
}

impl From<&ReportRecord> for ReportSummaryDto {
    fn from(r: &ReportRecord) -> Self {
        Self {
            id: r.id.clone(),
            category_label: r.category.label().to_string(),
            status: r.status,
            status_label: r.status.label().to_string(),
            protocol: r.protocol.to_string(),
            description_excerpt: r.excerpt(),
            date: r.submitted_date(),
            photo_url: r.photo_url.clone(),
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitReportResponseDto {
    pub report: ReportResponseDto,
    /// Warnings about what was not saved or uploaded
    pub notices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryOptionDto {
    pub slug: String,
    pub label: String,
}

impl From<ReportCategory> for CategoryOptionDto {
    fn from(c: ReportCategory) -> Self {
        Self {
            slug: c.slug().to_string(),
            label: c.label().to_string(),
        }
    }
}

/// Everything a client needs to draw the report form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportFormDto {
    pub categories: Vec<CategoryOptionDto>,
    pub max_description_chars: u64,
    pub max_photo_size_bytes: usize,
    pub accepted_photo_formats: Vec<PhotoExtension>,
    pub backend_connected: bool,
    pub notices: Vec<String>,
}
