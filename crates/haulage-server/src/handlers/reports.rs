//! Cross-store reports.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use haulage_types::OutputFormat;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::schemas::{DataResponse, ManifestsResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// `json` (default) or `table` for the plain-text report
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// GET /rest/v1/reports/manifests
pub async fn get_manifest_report(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|e| ApiError::DoesNotMatchSchema(e.body_text()))?;
    match query.format.unwrap_or(OutputFormat::Json) {
        OutputFormat::Table => Ok(state.fleet.manifest_report()?.into_response()),
        OutputFormat::Json => {
            let manifests = state.fleet.check_manifests()?;
            Ok(Json(DataResponse {
                data: ManifestsResponse { manifests },
            })
            .into_response())
        }
    }
}
