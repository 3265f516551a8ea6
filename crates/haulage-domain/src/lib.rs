//! Domain layer: parcels, vehicles, the storage contract and domain services

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Parcel, Truck, Vehicle, VehicleType};
pub use repository::StorageClient;
