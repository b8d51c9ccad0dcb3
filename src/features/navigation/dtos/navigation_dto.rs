use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::navigation::models::Page;

/// Request DTO for moving to another page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct NavigateDto {
    pub page: Page,
}

/// One entry of the bottom navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavItemDto {
    pub label: String,
    pub page: Page,
    /// True when this entry points at the current page
    pub active: bool,
    /// The central "new report" action
    pub prominent: bool,
}

/// Current page and the navigation bar rendered for it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponseDto {
    pub current_page: Page,
    pub title: String,
    pub nav_items: Vec<NavItemDto>,
}
