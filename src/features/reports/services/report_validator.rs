use thiserror::Error;
use validator::Validate;

use crate::core::error::AppError;
use crate::features::reports::dtos::SubmitReportDto;
use crate::features::reports::models::{file_extension, PhotoExtension, PhotoUpload, ReportCategory};
use crate::shared::constants::{MAX_DESCRIPTION_CHARS, MAX_PHOTO_SIZE};

/// Why a report submission was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportValidationError {
    #[error("missing coordinates")]
    MissingCoordinates,

    #[error("file too large: {size} bytes (maximum {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("invalid format: '{extension}' (use jpg, jpeg or png)")]
    InvalidFormat { extension: String },

    #[error("description too long (maximum {max} characters)")]
    DescriptionTooLong { max: u64 },

    #[error("unknown category: '{0}'")]
    UnknownCategory(String),
}

impl ReportValidationError {
    /// Inline message shown on the form
    pub fn user_message(&self) -> String {
        match self {
            ReportValidationError::MissingCoordinates => {
                "Por favor, informe a Latitude e a Longitude.".to_string()
            }
            ReportValidationError::FileTooLarge { max, .. } => {
                format!("A imagem deve ter no máximo {}MB.", max / 1024 / 1024)
            }
            ReportValidationError::InvalidFormat { .. } => {
                "Formato de imagem inválido. Use JPG ou PNG.".to_string()
            }
            ReportValidationError::DescriptionTooLong { max } => {
                format!("A descrição deve ter no máximo {} caracteres.", max)
            }
            ReportValidationError::UnknownCategory(_) => {
                "Selecione um tipo de problema da lista.".to_string()
            }
        }
    }
}

impl From<ReportValidationError> for AppError {
    fn from(e: ReportValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// A submission that passed every check
#[derive(Debug, Clone)]
pub struct ValidatedReport {
    pub category: ReportCategory,
    pub description: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub photo: Option<(PhotoUpload, PhotoExtension)>,
}

/// Check a raw submission.
///
/// Checks run in a fixed order and the first failure wins: coordinates,
/// photo size, photo format, description length, category. The description
/// is normalized (`\r\n` to `\n`, trimmed) before its length is checked, so
/// the checked text is the stored text.
pub fn validate_submission(
    mut dto: SubmitReportDto,
) -> std::result::Result<ValidatedReport, ReportValidationError> {
    let latitude = dto.latitude.trim().to_string();
    let longitude = dto.longitude.trim().to_string();
    if latitude.is_empty() || longitude.is_empty() {
        return Err(ReportValidationError::MissingCoordinates);
    }

    let photo = match dto.photo.take() {
        Some(photo) => {
            if photo.size() > MAX_PHOTO_SIZE {
                return Err(ReportValidationError::FileTooLarge {
                    size: photo.size(),
                    max: MAX_PHOTO_SIZE,
                });
            }
            let extension = PhotoExtension::from_file_name(&photo.file_name).ok_or_else(|| {
                ReportValidationError::InvalidFormat {
                    extension: file_extension(&photo.file_name).to_lowercase(),
                }
            })?;
            Some((photo, extension))
        }
        None => None,
    };

    dto.description = dto
        .description
        .map(|d| d.replace("\r\n", "\n").trim().to_string())
        .filter(|d| !d.is_empty());

    dto.validate()
        .map_err(|_| ReportValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_CHARS,
        })?;

    let category = dto
        .category
        .parse::<ReportCategory>()
        .map_err(ReportValidationError::UnknownCategory)?;

    Ok(ValidatedReport {
        category,
        description: dto.description,
        latitude,
        longitude,
        photo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> SubmitReportDto {
        SubmitReportDto {
            category: "Buraco na Via / Asfalto".to_string(),
            description: Some("Buraco grande em frente à escola".to_string()),
            latitude: "-23.456".to_string(),
            longitude: "-46.543".to_string(),
            photo: None,
        }
    }

    fn photo(name: &str, size: usize) -> PhotoUpload {
        PhotoUpload {
            file_name: name.to_string(),
            content_type: None,
            data: vec![0u8; size],
        }
    }

    #[test]
    fn test_valid_submission() {
        let report = validate_submission(valid_dto()).unwrap();
        assert_eq!(report.category, ReportCategory::Pothole);
        assert_eq!(report.latitude, "-23.456");
        assert!(report.photo.is_none());
    }

    #[test]
    fn test_missing_latitude() {
        let mut dto = valid_dto();
        dto.latitude = String::new();
        assert_eq!(
            validate_submission(dto).unwrap_err(),
            ReportValidationError::MissingCoordinates
        );
    }

    #[test]
    fn test_blank_longitude() {
        let mut dto = valid_dto();
        dto.longitude = "   ".to_string();
        assert_eq!(
            validate_submission(dto).unwrap_err(),
            ReportValidationError::MissingCoordinates
        );
    }

    #[test]
    fn test_coordinates_are_not_numerically_validated() {
        let mut dto = valid_dto();
        dto.latitude = "perto da escola".to_string();
        dto.longitude = "999".to_string();
        assert!(validate_submission(dto).is_ok());
    }

    #[test]
    fn test_photo_too_large() {
        let mut dto = valid_dto();
        dto.photo = Some(photo("buraco.png", 6 * 1024 * 1024));
        let err = validate_submission(dto).unwrap_err();
        assert!(matches!(err, ReportValidationError::FileTooLarge { .. }));
        assert!(err.to_string().contains("file too large"));
    }

    #[test]
    fn test_photo_at_exact_limit_is_accepted() {
        let mut dto = valid_dto();
        dto.photo = Some(photo("buraco.jpeg", MAX_PHOTO_SIZE));
        let report = validate_submission(dto).unwrap();
        assert_eq!(report.photo.unwrap().1, PhotoExtension::Jpeg);
    }

    #[test]
    fn test_photo_invalid_format() {
        let mut dto = valid_dto();
        dto.photo = Some(photo("buraco.gif", 1024));
        let err = validate_submission(dto).unwrap_err();
        assert_eq!(
            err,
            ReportValidationError::InvalidFormat {
                extension: "gif".to_string()
            }
        );
        assert!(err.to_string().contains("invalid format"));
    }

    #[test]
    fn test_size_checked_before_format() {
        let mut dto = valid_dto();
        dto.photo = Some(photo("buraco.gif", 6 * 1024 * 1024));
        assert!(matches!(
            validate_submission(dto).unwrap_err(),
            ReportValidationError::FileTooLarge { .. }
        ));
    }

    #[test]
    fn test_coordinates_checked_before_photo() {
        let mut dto = valid_dto();
        dto.latitude = String::new();
        dto.photo = Some(photo("buraco.gif", 1024));
        assert_eq!(
            validate_submission(dto).unwrap_err(),
            ReportValidationError::MissingCoordinates
        );
    }

    #[test]
    fn test_description_too_long() {
        let mut dto = valid_dto();
        dto.description = Some("x".repeat(301));
        assert_eq!(
            validate_submission(dto).unwrap_err(),
            ReportValidationError::DescriptionTooLong { max: 300 }
        );
    }

    #[test]
    fn test_description_limit_applies_after_trimming() {
        let mut dto = valid_dto();
        dto.description = Some(format!("{}  ", "a".repeat(299)));
        let report = validate_submission(dto).unwrap();
        assert_eq!(report.description.unwrap().chars().count(), 299);
    }

    #[test]
    fn test_crlf_line_breaks_count_as_one_character() {
        let mut dto = valid_dto();
        dto.description = Some(format!("{}\r\n{}", "a".repeat(150), "b".repeat(149)));
        let description = validate_submission(dto).unwrap().description.unwrap();
        assert_eq!(description.chars().count(), 300);
        assert!(!description.contains('\r'));
    }

    #[test]
    fn test_blank_description_becomes_none() {
        let mut dto = valid_dto();
        dto.description = Some("  ".to_string());
        assert_eq!(validate_submission(dto).unwrap().description, None);
    }

    #[test]
    fn test_unknown_category() {
        let mut dto = valid_dto();
        dto.category = "Enchente".to_string();
        assert_eq!(
            validate_submission(dto).unwrap_err(),
            ReportValidationError::UnknownCategory("Enchente".to_string())
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ReportValidationError::FileTooLarge {
                size: 0,
                max: MAX_PHOTO_SIZE
            }
            .user_message(),
            "A imagem deve ter no máximo 5MB."
        );
        assert!(ReportValidationError::MissingCoordinates
            .user_message()
            .contains("Latitude"));
    }
}
