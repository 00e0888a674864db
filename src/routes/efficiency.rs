use serde::{Deserialize, Serialize};

use crate::models::VehicleTypeId;

/// Busy-hour breakdown of one vehicle type.
///
/// `service_share` is the fraction of busy hours spent in revenue service
/// (0.0 when the type has no busy hours at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeEfficiency {
    pub vehicle_type: VehicleTypeId,
    pub service_trip_hours: f64,
    pub maintenance_slot_hours: f64,
    pub dead_head_trip_hours: f64,
    pub service_share: f64,
}

/// Fleet-wide busy-hour totals across all vehicle types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetTotals {
    pub service_trip_hours: f64,
    pub maintenance_slot_hours: f64,
    pub dead_head_trip_hours: f64,
    pub service_share: f64,
}

/// Fleet efficiency dataset: per-type breakdowns plus the fleet aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetEfficiencyData {
    pub groups: Vec<VehicleTypeEfficiency>,
    pub fleet: FleetTotals,
}

/// Route function name constant for fleet efficiency
pub const GET_FLEET_EFFICIENCY_DATA: &str = "get_fleet_efficiency_data";
