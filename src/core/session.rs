//! Per-browser session state.
//!
//! Each session owns its navigation state and the reports submitted during
//! its lifetime. Nothing here is persisted: a session disappears when it has
//! been idle longer than the configured timeout.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::features::navigation::models::{NavigationState, Page};
use crate::features::reports::models::ReportRecord;

/// Mutable state of a single session
#[derive(Debug, Default)]
pub struct SessionContext {
    navigation: NavigationState,
    reports: Vec<ReportRecord>,
    flash: Vec<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.navigation.current()
    }

    pub fn go_to(&mut self, page: Page) {
        self.navigation.go_to(page);
    }

    /// Reports in submission order (oldest first)
    pub fn reports(&self) -> &[ReportRecord] {
        &self.reports
    }

    pub fn append_report(&mut self, report: ReportRecord) {
        self.reports.push(report);
    }

    /// Session-local identifier for the next demonstration record
    pub fn next_demo_id(&self) -> String {
        format!("demo_{}", self.reports.len() + 1)
    }

    /// Queue messages to show once on the next rendered page
    pub fn push_flash(&mut self, messages: impl IntoIterator<Item = String>) {
        self.flash.extend(messages);
    }

    pub fn take_flash(&mut self) -> Vec<String> {
        std::mem::take(&mut self.flash)
    }
}

/// Handle to a resolved session, inserted into request extensions
#[derive(Clone, Debug)]
pub struct Session {
    pub id: Uuid,
    pub context: Arc<Mutex<SessionContext>>,
}

struct SessionEntry {
    context: Arc<Mutex<SessionContext>>,
    last_seen: Instant,
}

/// In-memory registry of live sessions
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Look up the requested session, creating a fresh one when it is
    /// unknown or expired. Returns the session and whether it was created.
    pub async fn resolve(&self, requested: Option<Uuid>) -> (Session, bool) {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        if let Some(id) = requested {
            if let Some(entry) = sessions.get_mut(&id) {
                if now.duration_since(entry.last_seen) <= self.idle_timeout {
                    entry.last_seen = now;
                    return (
                        Session {
                            id,
                            context: Arc::clone(&entry.context),
                        },
                        false,
                    );
                }
            }
        }

        let before = sessions.len();
        let idle_timeout = self.idle_timeout;
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) <= idle_timeout);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!("Purged {} expired sessions", purged);
        }

        let id = requested.unwrap_or_else(Uuid::new_v4);
        let context = Arc::new(Mutex::new(SessionContext::new()));
        sessions.insert(
            id,
            SessionEntry {
                context: Arc::clone(&context),
                last_seen: now,
            },
        );
        tracing::debug!("Session created: id={}, live_sessions={}", id, sessions.len());

        (Session { id, context }, true)
    }

    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_creates_session_at_home() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (session, created) = store.resolve(None).await;
        assert!(created);
        assert_eq!(session.context.lock().await.current_page(), Page::Home);
        assert!(session.context.lock().await.reports().is_empty());
    }

    #[tokio::test]
    async fn test_resolve_returns_existing_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (first, _) = store.resolve(None).await;
        first.context.lock().await.go_to(Page::IncidentMap);

        let (second, created) = store.resolve(Some(first.id)).await;
        assert!(!created);
        assert_eq!(second.id, first.id);
        assert_eq!(second.context.lock().await.current_page(), Page::IncidentMap);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (a, _) = store.resolve(None).await;
        let (b, _) = store.resolve(None).await;
        a.context.lock().await.go_to(Page::MyReports);

        assert_ne!(a.id, b.id);
        assert_eq!(b.context.lock().await.current_page(), Page::Home);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_expired_session_is_replaced() {
        let store = SessionStore::new(Duration::ZERO);
        let (first, _) = store.resolve(None).await;
        first.context.lock().await.go_to(Page::MyReports);
        tokio::time::sleep(Duration::from_millis(5)).await;

        let (second, created) = store.resolve(Some(first.id)).await;
        assert!(created);
        assert_eq!(second.context.lock().await.current_page(), Page::Home);
        assert_eq!(store.len().await, 1);
    }

    #[test]
    fn test_flash_messages_are_taken_once() {
        let mut ctx = SessionContext::new();
        ctx.push_flash(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(ctx.take_flash(), vec!["a".to_string(), "b".to_string()]);
        assert!(ctx.take_flash().is_empty());
    }

    #[test]
    fn test_next_demo_id_is_sequential() {
        let ctx = SessionContext::new();
        assert_eq!(ctx.next_demo_id(), "demo_1");
    }
}
