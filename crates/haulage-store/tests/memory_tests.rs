//! Behaviour tests for the in-memory storage facade

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use haulage_domain::{Parcel, StorageClient, Vehicle, VehicleType};
use haulage_store::MemoryStorage;
use haulage_types::{Error, StorageError, StorageErrorKind, VehicleError, Weight};

fn kg(value: f64) -> Weight {
    Weight::new(value).unwrap()
}

fn truck(id: &str, capacity: f64) -> Vehicle {
    Vehicle::new(VehicleType::Truck, id, kg(capacity))
}

fn load(storage: &MemoryStorage, vehicle_id: &str, parcel_id: &str) -> Result<Vehicle, Error> {
    let parcel = storage.get_parcel(parcel_id)?;
    storage.update_vehicle(vehicle_id, &mut |v: &mut Vehicle| v.load_parcel(&parcel))
}

fn unload(storage: &MemoryStorage, vehicle_id: &str, parcel_id: &str) -> Result<Vehicle, Error> {
    let parcel = storage.get_parcel(parcel_id)?;
    storage.update_vehicle(vehicle_id, &mut |v: &mut Vehicle| v.unload_parcel(&parcel))
}

#[test]
fn test_add_then_get_parcel() {
    let storage = MemoryStorage::new();
    storage.add_parcel(Parcel::new("p1", kg(10.0))).unwrap();

    let parcel = storage.get_parcel("p1").unwrap();
    assert_eq!(parcel.id(), "p1");
    assert_eq!(parcel.weight(), kg(10.0));
}

#[test]
fn test_duplicate_add_leaves_store_unchanged() {
    let storage = MemoryStorage::new();
    storage.add_parcel(Parcel::new("p1", kg(1.0))).unwrap();
    storage.add_vehicle(truck("t1", 5.0)).unwrap();

    let err = storage.add_parcel(Parcel::new("p1", kg(99.0))).unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::AlreadyExists);
    let err = storage.add_vehicle(truck("t1", 50.0)).unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::AlreadyExists);

    assert_eq!(storage.list_parcels().unwrap(), vec![Parcel::new("p1", kg(1.0))]);
    assert_eq!(storage.list_vehicles().unwrap(), vec![truck("t1", 5.0)]);
}

#[test]
fn test_get_and_delete_missing() {
    let storage = MemoryStorage::new();
    assert_eq!(
        storage.get_parcel("p1").unwrap_err().kind(),
        StorageErrorKind::NotFound
    );
    assert_eq!(
        storage.delete_parcel("p1").unwrap_err().kind(),
        StorageErrorKind::NotFound
    );
    assert_eq!(
        storage.get_vehicle("t1").unwrap_err().kind(),
        StorageErrorKind::NotFound
    );
    assert_eq!(
        storage.delete_vehicle("t1").unwrap_err().kind(),
        StorageErrorKind::NotFound
    );
}

#[test]
fn test_batch_add_is_all_or_nothing() {
    let storage = MemoryStorage::new();
    storage.add_parcel(Parcel::new("p2", kg(1.0))).unwrap();

    let err = storage
        .add_parcels(vec![
            Parcel::new("p1", kg(1.0)),
            Parcel::new("p2", kg(2.0)),
            Parcel::new("p3", kg(3.0)),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        StorageError::AlreadyExists {
            entity: "parcel",
            id: "p2".to_string()
        }
    );
    let ids: Vec<_> = storage
        .list_parcels()
        .unwrap()
        .iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(ids, vec!["p2"]);

    let err = storage
        .add_vehicles(vec![truck("t1", 1.0), truck("t1", 2.0)])
        .unwrap_err();
    assert_eq!(err.kind(), StorageErrorKind::AlreadyExists);
    assert!(storage.list_vehicles().unwrap().is_empty());

    let added = storage
        .add_vehicles(vec![truck("t1", 1.0), truck("t2", 2.0)])
        .unwrap();
    assert_eq!(added.len(), 2);
}

#[test]
fn test_delete_parcels_returns_everything() {
    let storage = MemoryStorage::new();
    storage
        .add_parcels(vec![Parcel::new("p1", kg(1.0)), Parcel::new("p2", kg(2.0))])
        .unwrap();

    let removed: HashSet<String> = storage
        .delete_parcels()
        .unwrap()
        .into_iter()
        .map(|p| p.id().to_string())
        .collect();
    assert_eq!(
        removed,
        HashSet::from(["p1".to_string(), "p2".to_string()])
    );
    assert!(storage.list_parcels().unwrap().is_empty());
    assert!(storage.delete_parcels().unwrap().is_empty());
}

#[test]
fn test_delete_vehicle_and_all_vehicles() {
    let storage = MemoryStorage::new();
    storage
        .add_vehicles(vec![truck("t1", 1.0), truck("t2", 2.0), truck("t3", 3.0)])
        .unwrap();

    assert_eq!(storage.delete_vehicle("t2").unwrap().id(), "t2");
    let removed = storage.delete_vehicles().unwrap();
    let ids: Vec<_> = removed.iter().map(|v| v.id()).collect();
    assert_eq!(ids, vec!["t1", "t3"]);
    assert!(storage.list_vehicles().unwrap().is_empty());
}

#[test]
fn test_capacity_boundary_through_storage() {
    let storage = MemoryStorage::new();
    storage.add_vehicle(truck("t1", 10.0)).unwrap();
    storage
        .add_parcels(vec![Parcel::new("p1", kg(10.0)), Parcel::new("p2", kg(0.1))])
        .unwrap();

    let vehicle = load(&storage, "t1", "p1").unwrap();
    assert_eq!(vehicle.current_weight(), kg(10.0));

    let err = load(&storage, "t1", "p2").unwrap_err();
    assert!(matches!(
        err,
        Error::Vehicle(VehicleError::CapacityExceeded { .. })
    ));
    assert_eq!(storage.get_vehicle("t1").unwrap().current_weight(), kg(10.0));
}

#[test]
fn test_unload_never_loaded() {
    let storage = MemoryStorage::new();
    storage.add_vehicle(truck("t1", 10.0)).unwrap();
    storage
        .add_parcels(vec![Parcel::new("p1", kg(3.0)), Parcel::new("p2", kg(1.0))])
        .unwrap();
    load(&storage, "t1", "p1").unwrap();

    let err = unload(&storage, "t1", "p2").unwrap_err();
    assert!(matches!(err, Error::Vehicle(VehicleError::NotLoaded { .. })));
    assert_eq!(storage.get_vehicle("t1").unwrap().current_weight(), kg(3.0));
}

#[test]
fn test_deleting_loaded_parcel_leaves_manifest_entry() {
    let storage = MemoryStorage::new();
    storage.add_vehicle(truck("t1", 10.0)).unwrap();
    storage.add_parcel(Parcel::new("p1", kg(3.0))).unwrap();
    load(&storage, "t1", "p1").unwrap();

    storage.delete_parcel("p1").unwrap();
    let vehicle = storage.get_vehicle("t1").unwrap();
    assert_eq!(vehicle.loaded_parcel_ids(), ["p1".to_string()]);
}

#[test]
fn test_concurrent_loads_respect_capacity() {
    let storage = Arc::new(MemoryStorage::new());
    storage.add_vehicle(truck("t1", 10.0)).unwrap();
    let parcels: Vec<Parcel> = (0..32)
        .map(|i| Parcel::new(format!("p{}", i), kg(1.0)))
        .collect();
    storage.add_parcels(parcels).unwrap();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || load(&storage, "t1", &format!("p{}", i)).is_ok())
        })
        .collect();
    let loaded = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    let vehicle = storage.get_vehicle("t1").unwrap();
    assert_eq!(loaded, 10);
    assert_eq!(vehicle.loaded_parcel_ids().len(), 10);
    assert_eq!(vehicle.current_weight(), kg(10.0));
    assert!(!vehicle.weight_capacity().less_than(vehicle.current_weight()));
}
