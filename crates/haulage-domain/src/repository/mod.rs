//! Storage contract consumed by the application and transport layers

use haulage_types::{Result, StorageError, VehicleError};

use crate::model::{Parcel, Vehicle};

/// Parcel and vehicle storage.
///
/// Reads return owned snapshots. Batch adds are all-or-nothing. No
/// cross-entity rule is enforced here: deleting a parcel that is still on
/// a vehicle's manifest leaves the ID in place.
pub trait StorageClient: Send + Sync {
    /// List all parcels
    fn list_parcels(&self) -> std::result::Result<Vec<Parcel>, StorageError>;

    /// Remove every parcel, returning what was stored
    fn delete_parcels(&self) -> std::result::Result<Vec<Parcel>, StorageError>;

    /// Find a parcel by ID
    fn get_parcel(&self, id: &str) -> std::result::Result<Parcel, StorageError>;

    /// Remove a parcel by ID
    fn delete_parcel(&self, id: &str) -> std::result::Result<Parcel, StorageError>;

    /// Add a single parcel
    fn add_parcel(&self, parcel: Parcel) -> std::result::Result<Parcel, StorageError>;

    /// Add several parcels, or none of them
    fn add_parcels(&self, parcels: Vec<Parcel>) -> std::result::Result<Vec<Parcel>, StorageError>;

    /// List all vehicles
    fn list_vehicles(&self) -> std::result::Result<Vec<Vehicle>, StorageError>;

    /// Find a vehicle by ID
    fn get_vehicle(&self, id: &str) -> std::result::Result<Vehicle, StorageError>;

    /// Add a single vehicle
    fn add_vehicle(&self, vehicle: Vehicle) -> std::result::Result<Vehicle, StorageError>;

    /// Add several vehicles, or none of them
    fn add_vehicles(
        &self,
        vehicles: Vec<Vehicle>,
    ) -> std::result::Result<Vec<Vehicle>, StorageError>;

    /// Remove a vehicle by ID
    fn delete_vehicle(&self, id: &str) -> std::result::Result<Vehicle, StorageError>;

    /// Remove every vehicle, returning what was stored
    fn delete_vehicles(&self) -> std::result::Result<Vec<Vehicle>, StorageError>;

    /// Run a state transition against a stored vehicle.
    ///
    /// `apply` runs while the vehicle store is locked, so no other write can
    /// interleave with it. Returns the vehicle as it stands afterwards.
    fn update_vehicle(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut Vehicle) -> std::result::Result<(), VehicleError>,
    ) -> Result<Vehicle>;
}
