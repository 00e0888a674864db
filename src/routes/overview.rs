//! Depot overview DTOs: one row per depot and vehicle type, combining
//! declared capacities with the vehicles the solver actually spawned.

use serde::{Deserialize, Serialize};

use crate::models::{DepotId, VehicleTypeId};

/// Route name constant for the depot overview endpoint.
pub const GET_DEPOT_OVERVIEW: &str = "get_depot_overview";

/// One depot/vehicle-type combination.
///
/// Rows exist for every combination declared in the request and for every
/// combination the solver spawned vehicles for, even when the request never
/// declared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotOverviewRow {
    pub depot_id: DepotId,
    pub vehicle_type: VehicleTypeId,
    /// Capacity for this vehicle type at this depot, falling back to the
    /// depot-wide capacity when no per-type capacity is declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type_capacity: Option<u32>,
    /// Depot-wide capacity, independent of vehicle type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Vehicles of this type spawned at this depot.
    pub vehicles: u32,
}

/// Depot overview rows, sorted by spawned vehicles in descending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotOverviewData {
    pub rows: Vec<DepotOverviewRow>,
}
