pub mod incident_map_handler;

pub use incident_map_handler::*;
