use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::reports::models::ReportCategory;
use crate::shared::constants::DESCRIPTION_EXCERPT_CHARS;

/// Report status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Kept in the session only, no backend write happened
    Demonstration,
    /// Accepted by the report store
    Submitted,
}

impl ReportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Demonstration => "Demonstração",
            ReportStatus::Submitted => "Enviada / Em Análise",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Demonstration => write!(f, "demonstration"),
            ReportStatus::Submitted => write!(f, "submitted"),
        }
    }
}

/// Human-readable reference shown to the citizen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProtocolCode(String);

impl ProtocolCode {
    /// `DEMO-XXXXXX`
    pub fn demo() -> Self {
        Self(format!("DEMO-{}", random_suffix()))
    }

    /// `GRL-YYYYMMDD-XXXXXX`, for records accepted by a store
    pub fn dated(at: DateTime<Utc>) -> Self {
        Self(format!("GRL-{}-{}", at.format("%Y%m%d"), random_suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProtocolCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Six uppercase hex characters from a random UUID
fn random_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..6].to_uppercase()
}

/// A submitted incident report. Never mutated once appended to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    pub category: ReportCategory,
    pub description: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub photo_url: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: ReportStatus,
    pub protocol: ProtocolCode,
}

impl ReportRecord {
    /// First characters of the description, for list views
    pub fn excerpt(&self) -> Option<String> {
        self.description
            .as_deref()
            .map(|d| d.chars().take(DESCRIPTION_EXCERPT_CHARS).collect())
    }

    /// Date portion of the submission timestamp (YYYY-MM-DD)
    pub fn submitted_date(&self) -> String {
        self.submitted_at.format("%Y-%m-%d").to_string()
    }
}
