use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Photo formats accepted with a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PhotoExtension {
    Jpg,
    Jpeg,
    Png,
}

impl PhotoExtension {
    pub const ALL: [PhotoExtension; 3] = [
        PhotoExtension::Jpg,
        PhotoExtension::Jpeg,
        PhotoExtension::Png,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhotoExtension::Jpg => "jpg",
            PhotoExtension::Jpeg => "jpeg",
            PhotoExtension::Png => "png",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            PhotoExtension::Jpg | PhotoExtension::Jpeg => "image/jpeg",
            PhotoExtension::Png => "image/png",
        }
    }

    /// Match the text after the last '.' of a file name, case-insensitively
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = file_extension(file_name).to_lowercase();
        PhotoExtension::ALL.into_iter().find(|e| e.as_str() == ext)
    }
}

/// Text after the last '.', or the whole name when there is none
pub fn file_extension(file_name: &str) -> &str {
    file_name.rsplit('.').next().unwrap_or(file_name)
}

/// Photo attached to a submission, as received
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl PhotoUpload {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
