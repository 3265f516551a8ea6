//! Parcel endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use haulage_domain::Parcel;

use crate::error::{ApiError, ApiResult};
use crate::schemas::{
    parcel_body, parcels_body, DataResponse, ParcelResponse, ParcelSchema, ParcelsResponse,
};
use crate::state::AppState;

/// POST /rest/v1/parcels
pub async fn create_parcels(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ParcelSchema>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DataResponse<ParcelsResponse>>)> {
    let Json(entries) = payload.map_err(|e| ApiError::DoesNotMatchSchema(e.body_text()))?;
    let parcels = entries
        .into_iter()
        .map(Parcel::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let added = state.storage.add_parcels(parcels)?;
    tracing::info!(count = added.len(), "Created parcels");
    Ok((StatusCode::CREATED, Json(parcels_body(&added))))
}

/// GET /rest/v1/parcels
pub async fn list_parcels(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<ParcelsResponse>>> {
    let parcels = state.storage.list_parcels()?;
    Ok(Json(parcels_body(&parcels)))
}

/// GET /rest/v1/parcels/{parcel_id}
pub async fn get_parcel(
    State(state): State<AppState>,
    Path(parcel_id): Path<String>,
) -> ApiResult<Json<DataResponse<ParcelResponse>>> {
    let parcel = state.storage.get_parcel(&parcel_id)?;
    Ok(Json(parcel_body(&parcel)))
}

/// DELETE /rest/v1/parcels/{parcel_id}
pub async fn delete_parcel(
    State(state): State<AppState>,
    Path(parcel_id): Path<String>,
) -> ApiResult<Json<DataResponse<ParcelResponse>>> {
    let parcel = state.storage.delete_parcel(&parcel_id)?;
    tracing::info!(parcel_id = %parcel_id, "Deleted parcel");
    Ok(Json(parcel_body(&parcel)))
}

/// DELETE /rest/v1/parcels
pub async fn delete_parcels(
    State(state): State<AppState>,
) -> ApiResult<Json<DataResponse<ParcelsResponse>>> {
    let removed = state.storage.delete_parcels()?;
    tracing::info!(count = removed.len(), "Deleted all parcels");
    Ok(Json(parcels_body(&removed)))
}
