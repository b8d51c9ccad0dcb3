mod photo;
mod report;
mod report_category;

pub use photo::{file_extension, PhotoExtension, PhotoUpload};
pub use report::{ProtocolCode, ReportRecord, ReportStatus};
pub use report_category::ReportCategory;
