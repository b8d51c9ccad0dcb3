//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the optional report backend (record store and photo storage).

pub mod backend;
