mod report_service;
mod report_validator;

pub use report_service::{ReportService, EMPTY_REPORTS_MESSAGE, SESSION_HISTORY_NOTE};
pub use report_validator::{validate_submission, ValidatedReport};
