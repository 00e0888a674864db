use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::VehicleTypeId;

/// Active-event counts at one sample instant, split by event kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEventsPoint {
    pub time: DateTime<Utc>,
    pub service_trips: u32,
    pub maintenance_slots: u32,
    pub dead_head_trips: u32,
}

/// Sampled active-event counts for one vehicle type over its schedule span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTypeActiveEvents {
    pub vehicle_type: VehicleTypeId,
    pub points: Vec<ActiveEventsPoint>,
}

/// Active-events dataset: one group per vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEventsData {
    pub groups: Vec<VehicleTypeActiveEvents>,
}

/// Route function name constant for active events
pub const GET_ACTIVE_EVENTS_DATA: &str = "get_active_events_data";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_active_events_point_construction() {
        let point = ActiveEventsPoint {
            time: Utc.with_ymd_and_hms(2023, 7, 24, 6, 15, 0).unwrap(),
            service_trips: 3,
            maintenance_slots: 1,
            dead_head_trips: 0,
        };
        assert_eq!(point.service_trips, 3);
        assert_eq!(point.dead_head_trips, 0);
    }

    #[test]
    fn test_active_events_data_clone() {
        let data = ActiveEventsData {
            groups: vec![VehicleTypeActiveEvents {
                vehicle_type: VehicleTypeId::new("RE"),
                points: vec![],
            }],
        };
        assert_eq!(data.clone(), data);
    }

    #[test]
    fn test_const_value() {
        assert_eq!(GET_ACTIVE_EVENTS_DATA, "get_active_events_data");
    }
}
