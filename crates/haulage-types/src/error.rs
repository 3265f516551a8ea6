//! Error types for haulage

use thiserror::Error;

/// Coarse classification of storage failures, for callers that branch on kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    NotFound,
    AlreadyExists,
    Internal,
}

/// Errors raised by the keyed stores and the storage facade
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("unable to find {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("unable to add {entity} with id {id} since it already exists")]
    AlreadyExists { entity: &'static str, id: String },

    #[error("internal storage error: {0}")]
    Internal(String),
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            StorageError::NotFound { .. } => StorageErrorKind::NotFound,
            StorageError::AlreadyExists { .. } => StorageErrorKind::AlreadyExists,
            StorageError::Internal(_) => StorageErrorKind::Internal,
        }
    }
}

/// Errors raised by vehicle load/unload transitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VehicleError {
    #[error("could not load parcel, parcel {parcel_id} is already on vehicle {vehicle_id}")]
    AlreadyLoaded {
        parcel_id: String,
        vehicle_id: String,
    },

    #[error("cannot load parcel {parcel_id} onto vehicle {vehicle_id}, it weighs too much")]
    CapacityExceeded {
        parcel_id: String,
        vehicle_id: String,
    },

    #[error("could not unload parcel, parcel {parcel_id} is not on vehicle {vehicle_id}")]
    NotLoaded {
        parcel_id: String,
        vehicle_id: String,
    },
}

/// Invalid weight values
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightError {
    #[error("weight must not be negative, got {0} kg")]
    Negative(f64),

    #[error("weight must be a finite number, got {0}")]
    NotFinite(f64),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Vehicle error: {0}")]
    Vehicle(#[from] VehicleError),

    #[error("Weight error: {0}")]
    Weight(#[from] WeightError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
