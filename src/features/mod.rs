pub mod home;
pub mod incident_map;
pub mod navigation;
pub mod pages;
pub mod reports;
