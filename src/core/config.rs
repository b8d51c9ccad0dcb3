use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Global request body limit (`MAX_REQUEST_BODY_SIZE`).
    ///
    /// The report upload routes (`POST /api/reports`, `POST /report`) set
    /// their own limit, `REPORT_FORM_BODY_LIMIT` (photo limit + 2MB), which
    /// replaces this one on those routes only.
    pub max_request_body_size: usize,
}

/// Credentials for the hosted realtime database and file storage.
///
/// All three values must be present for the backend to count as configured.
/// Anything missing (or an unparseable credential blob) puts the app in
/// demonstration mode.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub credentials: Option<String>,
    pub database_url: Option<String>,
    pub storage_bucket: Option<String>,
}

/// Subset of a service-account credential file that we check on startup
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type")]
    pub account_type: String,
    pub project_id: String,
    #[serde(default)]
    pub client_email: Option<String>,
}

/// Fully resolved backend settings, only built when every value is present
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub account: ServiceAccount,
    pub database_url: String,
    pub storage_bucket: String,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub idle_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            backend: BackendConfig::from_env(),
            session: SessionConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 8 * 1024 * 1024; // 8MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self {
            credentials: env::var("FIREBASE_CREDENTIALS")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            database_url: env::var("FIREBASE_DATABASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            storage_bucket: env::var("FIREBASE_STORAGE_BUCKET")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }

    /// Resolve the settings, or explain why the backend stays disabled
    pub fn resolve(&self) -> Result<BackendSettings, String> {
        let credentials = self
            .credentials
            .as_deref()
            .ok_or_else(|| "FIREBASE_CREDENTIALS is not set".to_string())?;
        let database_url = self
            .database_url
            .clone()
            .ok_or_else(|| "FIREBASE_DATABASE_URL is not set".to_string())?;
        let storage_bucket = self
            .storage_bucket
            .clone()
            .ok_or_else(|| "FIREBASE_STORAGE_BUCKET is not set".to_string())?;

        let account: ServiceAccount = serde_json::from_str(credentials)
            .map_err(|e| format!("FIREBASE_CREDENTIALS is not valid JSON: {}", e))?;
        if account.account_type != "service_account" {
            return Err(format!(
                "FIREBASE_CREDENTIALS has type '{}', expected 'service_account'",
                account.account_type
            ));
        }

        Ok(BackendSettings {
            account,
            database_url,
            storage_bucket,
        })
    }
}

impl SessionConfig {
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let idle_timeout_secs = env::var("SESSION_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "SESSION_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            idle_timeout: Duration::from_secs(idle_timeout_secs),
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(Self::DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Comunica Guarulhos API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Comunica Guarulhos".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
