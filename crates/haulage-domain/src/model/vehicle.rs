//! Vehicle type definitions

use haulage_types::{VehicleError, Weight};
use serde::{Deserialize, Serialize};

use super::{Parcel, Truck};

/// Kind of vehicle, as it appears on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Truck,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Truck => write!(f, "truck"),
        }
    }
}

/// A vehicle of any supported kind.
///
/// New kinds are added as variants; every variant must uphold the same
/// capacity invariant as [`Truck`].
#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
    Truck(Truck),
}

impl Vehicle {
    /// Build an empty vehicle of the given kind
    pub fn new(vehicle_type: VehicleType, id: impl Into<String>, weight_capacity: Weight) -> Self {
        match vehicle_type {
            VehicleType::Truck => Vehicle::Truck(Truck::new(id, weight_capacity)),
        }
    }

    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Vehicle::Truck(_) => VehicleType::Truck,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Vehicle::Truck(truck) => truck.id(),
        }
    }

    pub fn weight_capacity(&self) -> Weight {
        match self {
            Vehicle::Truck(truck) => truck.weight_capacity(),
        }
    }

    pub fn current_weight(&self) -> Weight {
        match self {
            Vehicle::Truck(truck) => truck.current_weight(),
        }
    }

    pub fn loaded_parcel_ids(&self) -> &[String] {
        match self {
            Vehicle::Truck(truck) => truck.loaded_parcel_ids(),
        }
    }

    pub fn load_parcel(&mut self, parcel: &Parcel) -> Result<(), VehicleError> {
        match self {
            Vehicle::Truck(truck) => truck.load_parcel(parcel),
        }
    }

    pub fn unload_parcel(&mut self, parcel: &Parcel) -> Result<(), VehicleError> {
        match self {
            Vehicle::Truck(truck) => truck.unload_parcel(parcel),
        }
    }
}

impl From<Truck> for Vehicle {
    fn from(truck: Truck) -> Self {
        Vehicle::Truck(truck)
    }
}
