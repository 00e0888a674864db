//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ChartsQuery, HealthResponse, InstanceListResponse, UploadInstanceRequest, UploadedInstance,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ChartCategory, ChartsData, DepotId, DepotLoadsData, InstanceId};
use crate::models::{Request, Response};
use crate::routes::overview::DepotOverviewData;
use crate::routes::summary::InstanceSummary;
use crate::services::{
    build_charts, compute_depot_loads, compute_depot_overview, compute_instance_summary,
    ChartSelection,
};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let instances = state.store.list_instances().await?.len();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        instances,
    }))
}

// =============================================================================
// Instance Lifecycle
// =============================================================================

/// GET /v1/instances
///
/// List all stored instances.
pub async fn list_instances(State(state): State<AppState>) -> HandlerResult<InstanceListResponse> {
    let instances = state.store.list_instances().await?;
    let total = instances.len();

    Ok(Json(InstanceListResponse { instances, total }))
}

/// POST /v1/instances
///
/// Upload a request/response pair and store it under a new instance id.
pub async fn upload_instance(
    State(state): State<AppState>,
    Json(payload): Json<UploadInstanceRequest>,
) -> Result<(StatusCode, Json<UploadedInstance>), AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "instance name must not be empty".to_string(),
        ));
    }

    let request: Request = serde_path_to_error::deserialize(payload.request)
        .map_err(|e| AppError::Unprocessable(format!("invalid request payload: {}", e)))?;
    let response: Response = serde_path_to_error::deserialize(payload.response)
        .map_err(|e| AppError::Unprocessable(format!("invalid response payload: {}", e)))?;

    let id = state.store.insert_instance(&name, request, response).await?;

    Ok((StatusCode::CREATED, Json(UploadedInstance { id, name })))
}

/// GET /v1/instances/{instance_id}
///
/// Get the summary of one stored instance.
pub async fn get_instance(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> HandlerResult<InstanceSummary> {
    let instance = state
        .store
        .get_instance(&InstanceId::new(instance_id))
        .await?;

    Ok(Json(compute_instance_summary(
        &instance.request,
        &instance.response,
    )))
}

/// DELETE /v1/instances/{instance_id}
///
/// Remove a stored instance.
pub async fn delete_instance(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .remove_instance(&InstanceId::new(instance_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Depot Endpoints
// =============================================================================

/// GET /v1/instances/{instance_id}/depots
///
/// Get the depot overview table for an instance.
pub async fn get_depot_overview(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> HandlerResult<DepotOverviewData> {
    let instance = state
        .store
        .get_instance(&InstanceId::new(instance_id))
        .await?;

    Ok(Json(compute_depot_overview(
        &instance.request,
        &instance.response,
    )))
}

/// GET /v1/instances/{instance_id}/depots/{depot_id}/loads
///
/// Get the reconstructed occupancy and cumulative load for one depot.
pub async fn get_depot_loads(
    State(state): State<AppState>,
    Path((instance_id, depot_id)): Path<(String, String)>,
) -> HandlerResult<DepotLoadsData> {
    let instance = state
        .store
        .get_instance(&InstanceId::new(instance_id))
        .await?;
    let depot_id = DepotId::new(depot_id);

    // Reconstruction walks the whole fleet, keep it off the async runtime.
    let data = tokio::task::spawn_blocking(move || {
        compute_depot_loads(&instance.request, &instance.response, &depot_id)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
    .map_err(AppError::from)?;

    Ok(Json(data))
}

// =============================================================================
// Chart Catalog
// =============================================================================

/// GET /v1/instances/{instance_id}/charts
///
/// Build any selection of dashboard charts in one call. The `categories`
/// query parameter is a comma-separated list; omitting it selects every
/// category. The `depot` parameter selects the depot for the depot loads
/// chart.
pub async fn get_charts(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
    Query(query): Query<ChartsQuery>,
) -> HandlerResult<ChartsData> {
    let depot_id = query.depot.map(DepotId::new);

    let selection = match &query.categories {
        None => ChartSelection::all(depot_id),
        Some(raw) => {
            let categories = raw
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| part.parse::<ChartCategory>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            if categories.contains(&ChartCategory::DepotLoads) && depot_id.is_none() {
                return Err(AppError::BadRequest(
                    "the depot_loads chart requires the 'depot' query parameter".to_string(),
                ));
            }
            ChartSelection {
                categories,
                depot_id,
            }
        }
    };

    let instance = state
        .store
        .get_instance(&InstanceId::new(instance_id))
        .await?;

    let data = tokio::task::spawn_blocking(move || {
        build_charts(&instance.request, &instance.response, &selection)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
    .map_err(AppError::from)?;

    Ok(Json(data))
}
