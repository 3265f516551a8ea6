//! Domain model types

pub mod parcel;
pub mod truck;
pub mod vehicle;

pub use parcel::Parcel;
pub use truck::Truck;
pub use vehicle::{Vehicle, VehicleType};
