//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most chart DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Active events
    ActiveEventsData, ActiveEventsPoint, VehicleTypeActiveEvents,
    // Chart catalog
    ChartCategory, ChartPayload, ChartsData,
    // Depot loads
    CumulativeLoadPoint, DepotLoadsData, InventoryWarning, OccupancyEvent, OccupancyKind,
    VehicleTypeSeries,
    // Depot overview
    DepotOverviewData, DepotOverviewRow,
    // Fleet efficiency
    FleetEfficiencyData, FleetTotals, VehicleTypeEfficiency,
    // Gantt
    GanttBlock, GanttData, VehicleTypeGantt,
    // Landing
    InstanceInfo, UploadedInstance,
    // Summary
    FleetCount, InstanceSummary, RequestSummary, ResponseSummary,
    // Utilization
    UtilizationData, VehicleTypeUtilization, VehicleUtilization,
};

/// Request body for uploading a new instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadInstanceRequest {
    /// Name for the instance
    pub name: String,
    /// Scheduling request JSON as sent to the solver
    pub request: serde_json::Value,
    /// Solver response JSON
    pub response: serde_json::Value,
}

/// Listing of stored instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceListResponse {
    pub instances: Vec<InstanceInfo>,
    pub total: usize,
}

/// Query parameters for the chart catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartsQuery {
    /// Comma-separated chart categories (default: all)
    #[serde(default)]
    pub categories: Option<String>,
    /// Depot id for the depot loads chart
    #[serde(default)]
    pub depot: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of instances currently stored
    pub instances: usize,
}
