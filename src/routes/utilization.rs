use serde::{Deserialize, Serialize};

use crate::models::{VehicleId, VehicleTypeId};

/// Total service-trip hours of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUtilization {
    pub vehicle_id: VehicleId,
    pub service_hours: f64,
}

/// Utilization of all vehicles of one type, sorted by hours descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeUtilization {
    pub vehicle_type: VehicleTypeId,
    pub vehicles: Vec<VehicleUtilization>,
    pub mean_service_hours: f64,
}

/// Utilization dataset: one group per vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationData {
    pub groups: Vec<VehicleTypeUtilization>,
}

/// Route function name constant for vehicle utilization
pub const GET_UTILIZATION_DATA: &str = "get_utilization_data";
