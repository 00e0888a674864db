use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{VehicleId, VehicleTypeId};
use crate::services::events::EventKind;

/// One bar in a vehicle-circuit Gantt chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttBlock {
    pub vehicle_id: VehicleId,
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Gantt rows for one vehicle type, in fleet order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeGantt {
    pub vehicle_type: VehicleTypeId,
    pub blocks: Vec<GanttBlock>,
}

/// Gantt dataset: one group per vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttData {
    pub groups: Vec<VehicleTypeGantt>,
}

/// Route function name constant for the Gantt chart
pub const GET_GANTT_DATA: &str = "get_gantt_data";
