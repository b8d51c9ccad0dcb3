#[cfg(test)]
use crate::core::session::SessionStore;
#[cfg(test)]
use crate::modules::backend::Backend;
#[cfg(test)]
use crate::shared::constants::SESSION_HEADER;
#[cfg(test)]
use axum::http::{HeaderName, HeaderValue};
#[cfg(test)]
use axum_test::TestServer;
#[cfg(test)]
use std::{sync::Arc, time::Duration};
#[cfg(test)]
use uuid::Uuid;

/// Test server over the full application router with the given backend
#[cfg(test)]
pub fn test_server_with(backend: Backend) -> TestServer {
    let sessions = Arc::new(SessionStore::new(Duration::from_secs(1800)));
    TestServer::new(crate::api_router(Arc::new(backend), sessions)).unwrap()
}

/// Test server in demonstration mode (no backend configured)
#[cfg(test)]
pub fn test_server() -> TestServer {
    test_server_with(Backend::demonstration())
}

/// Header pinning requests to one fresh session
#[cfg(test)]
pub fn session_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(SESSION_HEADER),
        HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
    )
}
