//! Request handlers.

pub mod health;
pub mod parcels;
pub mod reports;
pub mod vehicles;

pub use health::health_check;
pub use parcels::{create_parcels, delete_parcel, delete_parcels, get_parcel, list_parcels};
pub use reports::get_manifest_report;
pub use vehicles::{
    create_vehicles, delete_vehicle, delete_vehicles, get_vehicle, list_vehicles,
    load_parcel_on_vehicle, unload_parcel_from_vehicle,
};
