//! Vehicle endpoints, including parcel loading.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use haulage_domain::Vehicle;

use crate::error::{ApiError, ApiResult};
use crate::schemas::{
    vehicle_body, vehicles_body, DataResponse, VehicleResponse, VehicleSchema, VehiclesResponse,
};
use crate::state::AppState;

/// POST /rest/v1/vehicles
pub async fn create_vehicles(
    State(state): State<AppState>,
    payload: Result<Json<Vec<VehicleSchema>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<VehiclesResponse>>)> {
    let Json(entries) = payload.map_err(|e| ApiError::DoesNotMatchSchema(e.body_text()))?;
    let vehicles = entries
        .into_iter()
        .map(Vehicle::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let added = state.storage.add_vehicles(vehicles)?;
    tracing::info!(count = added.len(), "Created vehicles");
    Ok((StatusCode::CREATED, Json(vehicles_body(&added))))
}

/// GET /rest/v1/vehicles
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<VehiclesResponse>>> {
    let vehicles = state.storage.list_vehicles()?;
    Ok(Json(vehicles_body(&vehicles)))
}

/// GET /rest/v1/vehicles/{vehicle_id}
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> ApiResult<Json<DataResponse<VehicleResponse>>> {
    let vehicle = state.storage.get_vehicle(&vehicle_id)?;
    Ok(Json(vehicle_body(&vehicle)))
}

/// DELETE /rest/v1/vehicles/{vehicle_id}
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> ApiResult<Json<DataResponse<VehicleResponse>>> {
    let vehicle = state.storage.delete_vehicle(&vehicle_id)?;
    tracing::info!(vehicle_id = %vehicle_id, "Deleted vehicle");
    Ok(Json(vehicle_body(&vehicle)))
}

/// DELETE /rest/v1/vehicles
pub async fn delete_vehicles(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<VehiclesResponse>>> {
    let removed = state.storage.delete_vehicles()?;
    tracing::info!(count = removed.len(), "Deleted all vehicles");
    Ok(Json(vehicles_body(&removed)))
}

/// PUT /rest/v1/vehicles/{vehicle_id}/parcels/load/{parcel_id}
pub async fn load_parcel_on_vehicle(
    State(state): State<AppState>,
    Path((vehicle_id, parcel_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<VehicleResponse>>> {
    let vehicle = state.fleet.load_parcel(&vehicle_id, &parcel_id)?;
    Ok(Json(vehicle_body(&vehicle)))
}

/// PUT /rest/v1/vehicles/{vehicle_id}/parcels/unload/{parcel_id}
pub async fn unload_parcel_from_vehicle(
    State(state): State<AppState>,
    Path((vehicle_id, parcel_id)): Path<(String, String)>,
) -> ApiResult<Json<DataResponse<VehicleResponse>>> {
    let vehicle = state.fleet.unload_parcel(&vehicle_id, &parcel_id)?;
    Ok(Json(vehicle_body(&vehicle)))
}
