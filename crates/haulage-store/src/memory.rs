//! In-memory implementation of StorageClient

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use haulage_domain::{Parcel, StorageClient, Vehicle};
use haulage_types::{Result, StorageError, VehicleError};

use crate::keyed::KeyedStore;

/// Parcel and vehicle stores held in process memory.
///
/// Each store sits behind its own lock. Nothing survives a restart.
#[derive(Debug)]
pub struct MemoryStorage {
    parcels: RwLock<KeyedStore<Parcel>>,
    vehicles: RwLock<KeyedStore<Vehicle>>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(entity: &str) -> StorageError {
    StorageError::Internal(format!("{} store lock poisoned", entity))
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            parcels: RwLock::new(KeyedStore::new("parcel")),
            vehicles: RwLock::new(KeyedStore::new("vehicle")),
        }
    }

    fn parcels(&self) -> std::result::Result<RwLockReadGuard<'_, KeyedStore<Parcel>>, StorageError> {
        self.parcels.read().map_err(|_| poisoned("parcel"))
    }

    fn parcels_mut(
        &self,
    ) -> std::result::Result<RwLockWriteGuard<'_, KeyedStore<Parcel>>, StorageError> {
        self.parcels.write().map_err(|_| poisoned("parcel"))
    }

    fn vehicles(
        &self,
    ) -> std::result::Result<RwLockReadGuard<'_, KeyedStore<Vehicle>>, StorageError> {
        self.vehicles.read().map_err(|_| poisoned("vehicle"))
    }

    fn vehicles_mut(
        &self,
    ) -> std::result::Result<RwLockWriteGuard<'_, KeyedStore<Vehicle>>, StorageError> {
        self.vehicles.write().map_err(|_| poisoned("vehicle"))
    }
}

impl StorageClient for MemoryStorage {
    fn list_parcels(&self) -> std::result::Result<Vec<Parcel>, StorageError> {
        Ok(self.parcels()?.list().into_iter().cloned().collect())
    }

    fn delete_parcels(&self) -> std::result::Result<Vec<Parcel>, StorageError> {
        let removed = self.parcels_mut()?.delete_all();
        tracing::debug!(count = removed.len(), "Cleared parcel store");
        Ok(removed)
    }

    fn get_parcel(&self, id: &str) -> std::result::Result<Parcel, StorageError> {
        self.parcels()?.get(id).cloned()
    }

    fn delete_parcel(&self, id: &str) -> std::result::Result<Parcel, StorageError> {
        let removed = self.parcels_mut()?.delete(id)?;
        tracing::debug!(parcel_id = %id, "Deleted parcel");
        Ok(removed)
    }

    fn add_parcel(&self, parcel: Parcel) -> std::result::Result<Parcel, StorageError> {
        let mut store = self.parcels_mut()?;
        let added = store.add(parcel)?.clone();
        tracing::debug!(parcel_id = %added.id(), "Added parcel");
        Ok(added)
    }

    fn add_parcels(&self, parcels: Vec<Parcel>) -> std::result::Result<Vec<Parcel>, StorageError> {
        let mut store = self.parcels_mut()?;
        let added: Vec<Parcel> = store.add_batch(parcels)?.into_iter().cloned().collect();
        tracing::debug!(count = added.len(), "Added parcel batch");
        Ok(added)
    }

    fn list_vehicles(&self) -> std::result::Result<Vec<Vehicle>, StorageError> {
        Ok(self.vehicles()?.list().into_iter().cloned().collect())
    }

    fn get_vehicle(&self, id: &str) -> std::result::Result<Vehicle, StorageError> {
        self.vehicles()?.get(id).cloned()
    }

    fn add_vehicle(&self, vehicle: Vehicle) -> std::result::Result<Vehicle, StorageError> {
        let mut store = self.vehicles_mut()?;
        let added = store.add(vehicle)?.clone();
        tracing::debug!(vehicle_id = %added.id(), "Added vehicle");
        Ok(added)
    }

    fn add_vehicles(
        &self,
        vehicles: Vec<Vehicle>,
    ) -> std::result::Result<Vec<Vehicle>, StorageError> {
        let mut store = self.vehicles_mut()?;
        let added: Vec<Vehicle> = store.add_batch(vehicles)?.into_iter().cloned().collect();
        tracing::debug!(count = added.len(), "Added vehicle batch");
        Ok(added)
    }

    fn delete_vehicle(&self, id: &str) -> std::result::Result<Vehicle, StorageError> {
        let removed = self.vehicles_mut()?.delete(id)?;
        tracing::debug!(vehicle_id = %id, "Deleted vehicle");
        Ok(removed)
    }

    fn delete_vehicles(&self) -> std::result::Result<Vec<Vehicle>, StorageError> {
        let removed = self.vehicles_mut()?.delete_all();
        tracing::debug!(count = removed.len(), "Cleared vehicle store");
        Ok(removed)
    }

    fn update_vehicle(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut Vehicle) -> std::result::Result<(), VehicleError>,
    ) -> Result<Vehicle> {
        let mut store = self.vehicles_mut()?;
        let vehicle = store.get_mut(id)?;
        apply(vehicle)?;
        Ok(vehicle.clone())
    }
}
