//! Server-rendered mobile pages.
//!
//! `GET /` dispatches on the session's current page. Every action posts a
//! form and redirects back to `/`, so the view is re-rendered from the new
//! session state.

pub mod handlers;
pub mod routes;

pub use handlers::PageState;
