//! Route configuration.

use axum::routing::{get, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const ROOT_PATH: &str = "/rest/v1";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Vehicles
        .route(
            "/vehicles",
            get(handlers::list_vehicles)
                .post(handlers::create_vehicles)
                .delete(handlers::delete_vehicles),
        )
        .route(
            "/vehicles/{vehicle_id}",
            get(handlers::get_vehicle).delete(handlers::delete_vehicle),
        )
        .route(
            "/vehicles/{vehicle_id}/parcels/load/{parcel_id}",
            put(handlers::load_parcel_on_vehicle),
        )
        .route(
            "/vehicles/{vehicle_id}/parcels/unload/{parcel_id}",
            put(handlers::unload_parcel_from_vehicle),
        )
        // Parcels
        .route(
            "/parcels",
            get(handlers::list_parcels)
                .post(handlers::create_parcels)
                .delete(handlers::delete_parcels),
        )
        .route(
            "/parcels/{parcel_id}",
            get(handlers::get_parcel).delete(handlers::delete_parcel),
        )
        // Reports
        .route("/reports/manifests", get(handlers::get_manifest_report));

    Router::new()
        .nest(ROOT_PATH, api_routes)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
