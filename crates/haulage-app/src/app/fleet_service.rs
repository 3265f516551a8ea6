//! Fleet Service - loading use cases
//!
//! Resolves the vehicle and parcel through the storage facade and runs the
//! vehicle's own load/unload transition against the stored vehicle. Also
//! produces manifest consistency reports across both stores.

use std::sync::Arc;

use haulage_domain::service::{check_manifests, generate_manifest_report, ManifestCheckResult};
use haulage_domain::{Parcel, StorageClient, Vehicle};
use haulage_types::{Error, StorageError, VehicleError};
use thiserror::Error;

/// Errors specific to the fleet service
#[derive(Debug, Error)]
pub enum FleetServiceError {
    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Vehicle(#[from] VehicleError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for FleetServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::Storage(e) => FleetServiceError::Storage(e),
            Error::Vehicle(e) => FleetServiceError::Vehicle(e),
            other => FleetServiceError::Unexpected(other.to_string()),
        }
    }
}

#[derive(Clone, Copy)]
enum Transition {
    Load,
    Unload,
}

impl Transition {
    fn apply(self, vehicle: &mut Vehicle, parcel: &Parcel) -> Result<(), VehicleError> {
        match self {
            Transition::Load => vehicle.load_parcel(parcel),
            Transition::Unload => vehicle.unload_parcel(parcel),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Transition::Load => "load",
            Transition::Unload => "unload",
        }
    }
}

/// Use cases that span both stores
pub struct FleetService {
    storage: Arc<dyn StorageClient>,
}

impl FleetService {
    pub fn new(storage: Arc<dyn StorageClient>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<dyn StorageClient> {
        &self.storage
    }

    /// Load a stored parcel onto a stored vehicle
    pub fn load_parcel(
        &self,
        vehicle_id: &str,
        parcel_id: &str,
    ) -> Result<Vehicle, FleetServiceError> {
        self.transition(Transition::Load, vehicle_id, parcel_id)
    }

    /// Unload a stored parcel from a stored vehicle
    pub fn unload_parcel(
        &self,
        vehicle_id: &str,
        parcel_id: &str,
    ) -> Result<Vehicle, FleetServiceError> {
        self.transition(Transition::Unload, vehicle_id, parcel_id)
    }

    fn transition(
        &self,
        transition: Transition,
        vehicle_id: &str,
        parcel_id: &str,
    ) -> Result<Vehicle, FleetServiceError> {
        // Surface a missing vehicle before a missing parcel
        self.storage.get_vehicle(vehicle_id)?;
        let parcel = self.storage.get_parcel(parcel_id)?;

        let result = self
            .storage
            .update_vehicle(vehicle_id, &mut |vehicle: &mut Vehicle| {
                transition.apply(vehicle, &parcel)
            });

        match result {
            Ok(vehicle) => {
                tracing::info!(
                    vehicle_id = %vehicle_id,
                    parcel_id = %parcel_id,
                    current_kg = vehicle.current_weight().kg(),
                    capacity_kg = vehicle.weight_capacity().kg(),
                    "Parcel {}ed",
                    transition.label()
                );
                Ok(vehicle)
            }
            Err(Error::Vehicle(e)) => {
                tracing::warn!(
                    vehicle_id = %vehicle_id,
                    parcel_id = %parcel_id,
                    "Rejected {}: {}",
                    transition.label(),
                    e
                );
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check every vehicle's manifest against the parcel store
    pub fn check_manifests(&self) -> Result<Vec<ManifestCheckResult>, FleetServiceError> {
        let vehicles = self.storage.list_vehicles()?;
        let parcels = self.storage.list_parcels()?;
        let results = check_manifests(&vehicles, &parcels);

        let inconsistent = results.iter().filter(|r| !r.is_consistent).count();
        if inconsistent > 0 {
            tracing::warn!(inconsistent, "Found vehicles with inconsistent manifests");
        }
        Ok(results)
    }

    /// Human-readable manifest report
    pub fn manifest_report(&self) -> Result<String, FleetServiceError> {
        Ok(generate_manifest_report(&self.check_manifests()?))
    }
}
