use chrono::Utc;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::core::session::SessionContext;
use crate::features::navigation::models::Page;
use crate::features::reports::dtos::{
    CategoryOptionDto, ReportFormDto, ReportResponseDto, ReportSummaryDto, SubmitReportDto,
    SubmitReportResponseDto,
};
use crate::features::reports::models::{
    PhotoExtension, ProtocolCode, ReportCategory, ReportRecord, ReportStatus,
};
use crate::features::reports::services::{validate_submission, ValidatedReport};
use crate::modules::backend::Backend;
use crate::shared::constants::{MAX_DESCRIPTION_CHARS, MAX_PHOTO_SIZE, REPORTS_COLLECTION};

/// Message shown when the session has no reports yet
pub const EMPTY_REPORTS_MESSAGE: &str = "Você ainda não enviou nenhuma comunicação nesta sessão.";

/// Reminder that the history lives only as long as the session
pub const SESSION_HISTORY_NOTE: &str = "O histórico é mantido apenas enquanto você navega. Para um histórico permanente, seria necessário login e banco de dados.";

/// Service for submitting and listing a session's reports
pub struct ReportService {
    backend: Arc<Backend>,
}

impl ReportService {
    pub fn new(backend: Arc<Backend>) -> Self {
        Self { backend }
    }

    /// Form metadata plus the warnings shown above the form
    pub fn form(&self) -> ReportFormDto {
        let notices = if self.backend.is_connected() {
            Vec::new()
        } else {
            vec![
                "Conexão com o banco de dados indisponível. Funcionalidade desativada temporariamente.".to_string(),
                "As denúncias não serão salvas até que o banco de dados seja configurado.".to_string(),
                "Este é um modo de demonstração. Os dados NÃO serão salvos.".to_string(),
            ]
        };

        ReportFormDto {
            categories: ReportCategory::ALL
                .into_iter()
                .map(CategoryOptionDto::from)
                .collect(),
            max_description_chars: MAX_DESCRIPTION_CHARS,
            max_photo_size_bytes: MAX_PHOTO_SIZE,
            accepted_photo_formats: PhotoExtension::ALL.to_vec(),
            backend_connected: self.backend.is_connected(),
            notices,
        }
    }

    /// Validate and record a report in the session, then move to "my reports".
    ///
    /// On any failure the session is left untouched: no record is appended
    /// and the current page does not change.
    pub async fn submit(
        &self,
        ctx: &mut SessionContext,
        dto: SubmitReportDto,
    ) -> Result<SubmitReportResponseDto> {
        let report = validate_submission(dto).map_err(|e| {
            tracing::warn!("Report submission rejected: {}", e);
            AppError::from(e)
        })?;

        self.submit_validated(ctx, report).await
    }

    /// Record an already validated report. Same effects as [`Self::submit`].
    pub async fn submit_validated(
        &self,
        ctx: &mut SessionContext,
        report: ValidatedReport,
    ) -> Result<SubmitReportResponseDto> {
        let (record, notices) = self.build_record(ctx, report).await?;

        tracing::info!(
            "Report submitted: id={}, protocol={}, category={}, status={}",
            record.id,
            record.protocol,
            record.category.slug(),
            record.status
        );

        let response = SubmitReportResponseDto {
            report: ReportResponseDto::from(&record),
            notices,
        };
        ctx.append_report(record);
        ctx.go_to(Page::MyReports);

        Ok(response)
    }

    async fn build_record(
        &self,
        ctx: &SessionContext,
        report: ValidatedReport,
    ) -> Result<(ReportRecord, Vec<String>)> {
        let mut notices = Vec::new();
        let submitted_at = Utc::now();

        let mut photo_url = None;
        if let Some((photo, extension)) = report.photo {
            match self.backend.blobs() {
                Some(blobs) => {
                    let content_type = photo
                        .content_type
                        .clone()
                        .unwrap_or_else(|| extension.content_type().to_string());
                    let url = blobs
                        .upload(photo.data, &photo.file_name, &content_type)
                        .await?;
                    tracing::debug!("Photo uploaded: {}", url);
                    photo_url = Some(url);
                }
                None if self.backend.is_connected() => {
                    notices.push(
                        "Upload de imagem não configurado. A denúncia será salva sem foto."
                            .to_string(),
                    );
                }
                None => {
                    notices.push("Modo demonstração: Upload de imagem não configurado.".to_string());
                }
            }
        }

        let mut record = ReportRecord {
            id: ctx.next_demo_id(),
            category: report.category,
            description: report.description,
            latitude: report.latitude,
            longitude: report.longitude,
            photo_url,
            submitted_at,
            status: ReportStatus::Demonstration,
            protocol: ProtocolCode::demo(),
        };

        match self.backend.store() {
            Some(store) => {
                record.status = ReportStatus::Submitted;
                record.protocol = ProtocolCode::dated(submitted_at);
                let payload = serde_json::to_value(&record)
                    .map_err(|e| AppError::Internal(format!("Failed to encode report: {}", e)))?;
                record.id = store.push(REPORTS_COLLECTION, &payload).await?;
                notices.insert(
                    0,
                    format!("Comunicação enviada com sucesso! Protocolo: {}", record.protocol),
                );
            }
            None => {
                notices.push("Modo demonstração: A denúncia NÃO foi salva no banco de dados.".to_string());
                notices.insert(
                    0,
                    format!("Comunicação preenchida com sucesso! Protocolo: {}", record.protocol),
                );
                notices.push(
                    "Acompanhe o status na aba Minhas Demandas (não persistente).".to_string(),
                );
            }
        }

        Ok((record, notices))
    }

    /// The session's reports in submission order
    pub fn list(&self, ctx: &SessionContext) -> Vec<ReportSummaryDto> {
        ctx.reports().iter().map(ReportSummaryDto::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::PhotoUpload;
    use crate::modules::backend::{BackendError, BlobStore, ReportStore};
    use crate::shared::validation::PROTOCOL_CODE_REGEX;
    use async_trait::async_trait;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use serde_json::Value;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        pushed: Mutex<Vec<(String, Value)>>,
    }

    #[async_trait]
    impl ReportStore for RecordingStore {
        async fn push(&self, collection: &str, record: &Value) -> std::result::Result<String, BackendError> {
            let mut pushed = self.pushed.lock().unwrap();
            pushed.push((collection.to_string(), record.clone()));
            Ok(format!("-Nkey{}", pushed.len()))
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ReportStore for FailingStore {
        async fn push(&self, collection: &str, _record: &Value) -> std::result::Result<String, BackendError> {
            Err(BackendError::Push {
                collection: collection.to_string(),
                reason: "unreachable".to_string(),
            })
        }
    }

    struct StaticBlobs;

    #[async_trait]
    impl BlobStore for StaticBlobs {
        async fn upload(
            &self,
            _data: Vec<u8>,
            file_name: &str,
            _content_type: &str,
        ) -> std::result::Result<String, BackendError> {
            Ok(format!("https://storage.example/{}", file_name))
        }
    }

    fn demo_service() -> ReportService {
        ReportService::new(Arc::new(Backend::demonstration()))
    }

    fn pothole_dto() -> SubmitReportDto {
        SubmitReportDto {
            category: "Buraco na Via / Asfalto".to_string(),
            description: None,
            latitude: "-23.456".to_string(),
            longitude: "-46.543".to_string(),
            photo: None,
        }
    }

    fn on_form() -> SessionContext {
        let mut ctx = SessionContext::new();
        ctx.go_to(Page::NewReport);
        ctx
    }

    fn photo(name: &str, size: usize) -> Option<PhotoUpload> {
        Some(PhotoUpload {
            file_name: name.to_string(),
            content_type: Some("image/png".to_string()),
            data: vec![7u8; size],
        })
    }

    #[tokio::test]
    async fn test_valid_submission_appends_one_record_and_navigates() {
        let service = demo_service();
        let mut ctx = on_form();

        let response = service.submit(&mut ctx, pothole_dto()).await.unwrap();

        assert_eq!(ctx.reports().len(), 1);
        assert_eq!(ctx.current_page(), Page::MyReports);
        let record = &ctx.reports()[0];
        assert_eq!(record.id, "demo_1");
        assert_eq!(record.category, ReportCategory::Pothole);
        assert_eq!(record.status, ReportStatus::Demonstration);
        assert!(record.photo_url.is_none());
        assert!(PROTOCOL_CODE_REGEX.is_match(record.protocol.as_str()));
        assert!(record.protocol.as_str().starts_with("DEMO-"));
        assert_eq!(response.report.protocol, record.protocol.to_string());
        assert!(response.notices[0].contains(record.protocol.as_str()));
    }

    #[tokio::test]
    async fn test_missing_coordinates_keeps_user_on_form() {
        let service = demo_service();
        let mut ctx = on_form();

        let mut dto = pothole_dto();
        dto.latitude = String::new();
        let err = service.submit(&mut ctx, dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "missing coordinates"));

        let mut dto = pothole_dto();
        dto.longitude = String::new();
        assert!(service.submit(&mut ctx, dto).await.is_err());

        assert!(ctx.reports().is_empty());
        assert_eq!(ctx.current_page(), Page::NewReport);
    }

    #[tokio::test]
    async fn test_oversized_png_is_rejected() {
        let service = demo_service();
        let mut ctx = on_form();
        let mut dto = pothole_dto();
        dto.photo = photo("buraco.png", 6 * 1024 * 1024);

        let err = service.submit(&mut ctx, dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("file too large")));
        assert!(ctx.reports().is_empty());
        assert_eq!(ctx.current_page(), Page::NewReport);
    }

    #[tokio::test]
    async fn test_gif_is_rejected() {
        let service = demo_service();
        let mut ctx = on_form();
        let mut dto = pothole_dto();
        dto.photo = photo("buraco.gif", 2048);

        let err = service.submit(&mut ctx, dto).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("invalid format")));
        assert!(ctx.reports().is_empty());
    }

    #[tokio::test]
    async fn test_photo_is_discarded_in_demonstration_mode() {
        let service = demo_service();
        let mut ctx = on_form();
        let mut dto = pothole_dto();
        dto.photo = photo("buraco.jpg", 2048);

        let response = service.submit(&mut ctx, dto).await.unwrap();
        assert!(ctx.reports()[0].photo_url.is_none());
        assert!(response
            .notices
            .iter()
            .any(|n| n.contains("Upload de imagem não configurado")));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order_and_is_idempotent() {
        let service = demo_service();
        let mut ctx = SessionContext::new();
        assert!(service.list(&ctx).is_empty());

        for category in ["pothole", "garbage", "noise"] {
            let mut dto = pothole_dto();
            dto.category = category.to_string();
            dto.description = Some(Sentence(3..8).fake());
            service.submit(&mut ctx, dto).await.unwrap();
        }

        let first = service.list(&ctx);
        let second = service.list(&ctx);
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["demo_1", "demo_2", "demo_3"]);
        assert_eq!(first[1].category_label, "Lixo e Entulho Acumulado");
    }

    #[tokio::test]
    async fn test_list_truncates_description() {
        let service = demo_service();
        let mut ctx = SessionContext::new();
        let mut dto = pothole_dto();
        dto.description = Some("b".repeat(200));
        service.submit(&mut ctx, dto).await.unwrap();

        let summary = &service.list(&ctx)[0];
        assert_eq!(summary.description_excerpt.as_ref().unwrap().len(), 70);
        assert_eq!(summary.date, ctx.reports()[0].submitted_at.format("%Y-%m-%d").to_string());
    }

    #[tokio::test]
    async fn test_configured_store_receives_record() {
        let store = Arc::new(RecordingStore::default());
        let backend = Backend::demonstration().with_store(store.clone());
        let service = ReportService::new(Arc::new(backend));
        let mut ctx = SessionContext::new();

        service.submit(&mut ctx, pothole_dto()).await.unwrap();

        let pushed = store.pushed.lock().unwrap();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].0, REPORTS_COLLECTION);
        assert_eq!(pushed[0].1["category"], "pothole");

        let record = &ctx.reports()[0];
        assert_eq!(record.id, "-Nkey1");
        assert_eq!(record.status, ReportStatus::Submitted);
        assert!(record.protocol.as_str().starts_with("GRL-"));
        assert!(PROTOCOL_CODE_REGEX.is_match(record.protocol.as_str()));
    }

    #[tokio::test]
    async fn test_store_failure_appends_nothing() {
        let backend = Backend::demonstration().with_store(Arc::new(FailingStore));
        let service = ReportService::new(Arc::new(backend));
        let mut ctx = on_form();

        let err = service.submit(&mut ctx, pothole_dto()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalServiceError(_)));
        assert!(ctx.reports().is_empty());
        assert_eq!(ctx.current_page(), Page::NewReport);
    }

    #[tokio::test]
    async fn test_configured_blob_store_sets_photo_url() {
        let backend = Backend::demonstration().with_blobs(Arc::new(StaticBlobs));
        let service = ReportService::new(Arc::new(backend));
        let mut ctx = SessionContext::new();
        let mut dto = pothole_dto();
        dto.photo = photo("buraco.png", 1024);

        service.submit(&mut ctx, dto).await.unwrap();
        assert_eq!(
            ctx.reports()[0].photo_url.as_deref(),
            Some("https://storage.example/buraco.png")
        );
    }

    #[test]
    fn test_form_lists_categories_and_demo_notices() {
        let form = demo_service().form();
        assert_eq!(form.categories.len(), 9);
        assert_eq!(form.categories[0].label, "Buraco na Via / Asfalto");
        assert_eq!(form.max_photo_size_bytes, 5 * 1024 * 1024);
        assert!(!form.backend_connected);
        assert_eq!(form.notices.len(), 3);
    }
}
