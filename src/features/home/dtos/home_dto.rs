use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// External municipal service link
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuickLinkDto {
    pub key: String,
    pub label: String,
    pub url: String,
}

/// Informational counter shown on the home page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HighlightDto {
    /// "info" or "warning"
    pub tone: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponseDto {
    pub title: String,
    pub tagline: String,
    pub quick_links: Vec<QuickLinkDto>,
    pub highlights: Vec<HighlightDto>,
}
