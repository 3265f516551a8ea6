//! Request and response bodies.

use haulage_domain::service::ManifestCheckResult;
use haulage_domain::{Parcel, Vehicle, VehicleType};
use haulage_types::Weight;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope around every response body.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelSchema {
    pub id: String,
    pub weight: Weight,
}

/// Vehicle as sent and received. `currentWeight` and `loadedParcels` are
/// ignored on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSchema {
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub weight_capacity: Weight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weight: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded_parcels: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ParcelsResponse {
    pub parcels: Vec<ParcelSchema>,
}

#[derive(Debug, Serialize)]
pub struct ParcelResponse {
    pub parcel: ParcelSchema,
}

#[derive(Debug, Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<VehicleSchema>,
}

#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vehicle: VehicleSchema,
}

#[derive(Debug, Serialize)]
pub struct ManifestsResponse {
    pub manifests: Vec<ManifestCheckResult>,
}

fn require_id(id: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::DoesNotMatchSchema("id must not be empty".to_string()));
    }
    Ok(())
}

impl From<&Parcel> for ParcelSchema {
    fn from(parcel: &Parcel) -> Self {
        Self {
            id: parcel.id().to_string(),
            weight: parcel.weight(),
        }
    }
}

impl TryFrom<ParcelSchema> for Parcel {
    type Error = ApiError;

    fn try_from(schema: ParcelSchema) -> Result<Self, Self::Error> {
        require_id(&schema.id)?;
        Ok(Parcel::new(schema.id, schema.weight))
    }
}

impl From<&Vehicle> for VehicleSchema {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id().to_string(),
            vehicle_type: vehicle.vehicle_type(),
            weight_capacity: vehicle.weight_capacity(),
            current_weight: Some(vehicle.current_weight()),
            loaded_parcels: Some(vehicle.loaded_parcel_ids().to_vec()),
        }
    }
}

impl TryFrom<VehicleSchema> for Vehicle {
    type Error = ApiError;

    fn try_from(schema: VehicleSchema) -> Result<Self, Self::Error> {
        require_id(&schema.id)?;
        Ok(Vehicle::new(
            schema.vehicle_type,
            schema.id,
            schema.weight_capacity,
        ))
    }
}

pub fn parcels_body(parcels: &[Parcel]) -> DataResponse<ParcelsResponse> {
    DataResponse {
        data: ParcelsResponse {
            parcels: parcels.iter().map(ParcelSchema::from).collect(),
        },
    }
}

pub fn parcel_body(parcel: &Parcel) -> DataResponse<ParcelResponse> {
    DataResponse {
        data: ParcelResponse {
            parcel: parcel.into(),
        },
    }
}

pub fn vehicles_body(vehicles: &[Vehicle]) -> DataResponse<VehiclesResponse> {
    DataResponse {
        data: VehiclesResponse {
            vehicles: vehicles.iter().map(VehicleSchema::from).collect(),
        },
    }
}

pub fn vehicle_body(vehicle: &Vehicle) -> DataResponse<VehicleResponse> {
    DataResponse {
        data: VehicleResponse {
            vehicle: vehicle.into(),
        },
    }
}
