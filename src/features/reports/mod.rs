//! Incident reports submitted by citizens.
//!
//! Reports live in the submitting session only. When a report store is
//! configured the record is also pushed there.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/reports` | List this session's reports |
//! | POST | `/api/reports` | Submit a report (multipart) |
//! | GET | `/api/reports/form` | Form metadata |
//! | GET | `/api/reports/{id}` | Get one report |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
