//! Application service layer - use cases, config, storage wiring

pub mod app;
pub mod config;
pub mod repository;

pub use app::{FleetService, FleetServiceError};
pub use config::Config;
