//! Capability interface for the hosted realtime database and file storage.
//!
//! Handlers never talk to a concrete backend. They check whether a
//! [`ReportStore`] / [`BlobStore`] is present and fall back to demonstration
//! behavior when it is not.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::core::config::{BackendConfig, BackendSettings};
use crate::core::error::AppError;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to push record to '{collection}': {reason}")]
    Push { collection: String, reason: String },

    #[error("Failed to upload '{file_name}': {reason}")]
    Upload { file_name: String, reason: String },
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        AppError::ExternalServiceError(e.to_string())
    }
}

/// Realtime key-value store
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Append `record` under `collection`, returning the generated key
    async fn push(&self, collection: &str, record: &Value) -> Result<String, BackendError>;
}

/// Blob storage for report photos
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` and return a URL that serves it
    async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        content_type: &str,
    ) -> Result<String, BackendError>;
}

/// What the app can reach at runtime
#[derive(Clone, Default)]
pub struct Backend {
    settings: Option<BackendSettings>,
    store: Option<Arc<dyn ReportStore>>,
    blobs: Option<Arc<dyn BlobStore>>,
}

impl Backend {
    /// Demonstration mode: nothing configured
    pub fn demonstration() -> Self {
        Self::default()
    }

    /// Build the capability from configuration.
    ///
    /// Valid credentials mark the backend as connected. The write and upload
    /// paths have no networked implementation, so `store` and `blobs` stay
    /// empty and submissions are still kept in the session only.
    pub fn from_config(config: &BackendConfig) -> Self {
        match config.resolve() {
            Ok(settings) => {
                tracing::info!(
                    "Backend credentials loaded: project_id={}, client_email={}, database_url={}, storage_bucket={}",
                    settings.account.project_id,
                    settings.account.client_email.as_deref().unwrap_or("-"),
                    settings.database_url,
                    settings.storage_bucket
                );
                tracing::warn!(
                    "Report store and photo upload are not implemented; submissions stay in the session"
                );
                Self {
                    settings: Some(settings),
                    store: None,
                    blobs: None,
                }
            }
            Err(reason) => {
                tracing::warn!("Backend not configured ({}); running in demonstration mode", reason);
                Self::demonstration()
            }
        }
    }

    #[allow(dead_code)]
    pub fn with_store(mut self, store: Arc<dyn ReportStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[allow(dead_code)]
    pub fn with_blobs(mut self, blobs: Arc<dyn BlobStore>) -> Self {
        self.blobs = Some(blobs);
        self
    }

    /// True when credentials were accepted or a store was attached
    pub fn is_connected(&self) -> bool {
        self.settings.is_some() || self.store.is_some()
    }

    pub fn store(&self) -> Option<&Arc<dyn ReportStore>> {
        self.store.as_ref()
    }

    pub fn blobs(&self) -> Option<&Arc<dyn BlobStore>> {
        self.blobs.as_ref()
    }
}
