//! Page navigation for a session.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/navigation` | Current page and bottom bar |
//! | PUT | `/api/navigation` | Go to a page |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NavigationService;
