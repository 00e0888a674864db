use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DepotId, VehicleId, VehicleTypeId};

// =========================================================
// Depot load types
// =========================================================

/// Kind of an occupancy event in a depot's reconstructed timeline.
///
/// `Initial` and `Final` are synthetic boundary events bracketing the real
/// departure/arrival stream for charting continuity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyKind {
    Initial,
    Departure,
    Arrival,
    Final,
}

impl OccupancyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OccupancyKind::Initial => "initial",
            OccupancyKind::Departure => "departure",
            OccupancyKind::Arrival => "arrival",
            OccupancyKind::Final => "final",
        }
    }
}

impl std::fmt::Display for OccupancyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step in a vehicle type's occupancy timeline at a depot.
///
/// `units` is the running vehicle count after this event. Boundary events
/// carry no vehicle id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyEvent {
    pub time: DateTime<Utc>,
    pub vehicle_type: VehicleTypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<VehicleId>,
    pub kind: OccupancyKind,
    pub units: i64,
}

/// Occupancy timeline for a single vehicle type, ordered by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeSeries {
    pub vehicle_type: VehicleTypeId,
    pub events: Vec<OccupancyEvent>,
}

/// Fleet-wide running total across all vehicle types, ordered by time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeLoadPoint {
    pub time: DateTime<Utc>,
    pub total_units: i64,
}

/// Data-quality signal: a running count dropped below zero.
///
/// More departures than available units indicate an inconsistent schedule.
/// The count is reported as-is, never clamped to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryWarning {
    pub depot_id: DepotId,
    pub vehicle_type: VehicleTypeId,
    pub time: DateTime<Utc>,
    pub units: i64,
}

/// Depot loads dataset: the per-type step series, the fleet-wide cumulative
/// series, the declared capacity threshold, and any inventory warnings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotLoadsData {
    pub depot_id: DepotId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub series: Vec<VehicleTypeSeries>,
    pub cumulative: Vec<CumulativeLoadPoint>,
    pub warnings: Vec<InventoryWarning>,
}

/// Route function name constant for depot loads
pub const GET_DEPOT_LOADS: &str = "get_depot_loads";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 7, 24, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_occupancy_event_serializes_without_empty_vehicle_id() {
        let event = OccupancyEvent {
            time: ts(5),
            vehicle_type: VehicleTypeId::new("IC"),
            vehicle_id: None,
            kind: OccupancyKind::Initial,
            units: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("vehicleId"));
        assert!(json.contains("\"initial\""));
        assert!(json.contains("\"vehicleType\""));
    }

    #[test]
    fn test_depot_loads_data_clone() {
        let data = DepotLoadsData {
            depot_id: DepotId::new("depot_ZH"),
            capacity: Some(12),
            series: vec![VehicleTypeSeries {
                vehicle_type: VehicleTypeId::new("IC"),
                events: vec![],
            }],
            cumulative: vec![CumulativeLoadPoint {
                time: ts(6),
                total_units: 3,
            }],
            warnings: vec![],
        };
        let cloned = data.clone();
        assert_eq!(cloned, data);
    }

    #[test]
    fn test_occupancy_kind_as_str() {
        assert_eq!(OccupancyKind::Departure.as_str(), "departure");
        assert_eq!(OccupancyKind::Final.to_string(), "final");
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_DEPOT_LOADS, "get_depot_loads");
    }
}
