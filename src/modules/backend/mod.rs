//! Backend module for the hosted database and storage collaborators
//!
//! Exposes the capability object handlers consult before writing anywhere
//! other than session memory.

mod store;

pub use store::{Backend, BackendError, BlobStore, ReportStore};
