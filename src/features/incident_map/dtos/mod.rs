mod incident_map_dto;

pub use incident_map_dto::*;
