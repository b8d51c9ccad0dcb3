//! Incident map placeholder. The map needs a backend with other citizens'
//! reports, which this app never has.

pub mod dtos;
pub mod handlers;
pub mod routes;
