//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::active_events::ActiveEventsData;
pub use crate::routes::active_events::ActiveEventsPoint;
pub use crate::routes::active_events::VehicleTypeActiveEvents;
pub use crate::routes::charts::ChartCategory;
pub use crate::routes::charts::ChartPayload;
pub use crate::routes::charts::ChartsData;
pub use crate::routes::charts::UnknownChartCategory;
pub use crate::routes::depot_loads::CumulativeLoadPoint;
pub use crate::routes::depot_loads::DepotLoadsData;
pub use crate::routes::depot_loads::InventoryWarning;
pub use crate::routes::depot_loads::OccupancyEvent;
pub use crate::routes::depot_loads::OccupancyKind;
pub use crate::routes::depot_loads::VehicleTypeSeries;
pub use crate::routes::efficiency::FleetEfficiencyData;
pub use crate::routes::efficiency::FleetTotals;
pub use crate::routes::efficiency::VehicleTypeEfficiency;
pub use crate::routes::gantt::GanttBlock;
pub use crate::routes::gantt::GanttData;
pub use crate::routes::gantt::VehicleTypeGantt;
pub use crate::routes::landing::InstanceInfo;
pub use crate::routes::landing::UploadedInstance;
pub use crate::routes::overview::DepotOverviewData;
pub use crate::routes::overview::DepotOverviewRow;
pub use crate::routes::summary::FleetCount;
pub use crate::routes::summary::InstanceSummary;
pub use crate::routes::summary::RequestSummary;
pub use crate::routes::summary::ResponseSummary;
pub use crate::routes::utilization::UtilizationData;
pub use crate::routes::utilization::VehicleTypeUtilization;
pub use crate::routes::utilization::VehicleUtilization;

pub use crate::models::DepotId;
pub use crate::models::InstanceId;
pub use crate::models::VehicleId;
pub use crate::models::VehicleTypeId;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_types_are_exported() {
        let depot = DepotId::new("depot_ZH");
        let vehicle = VehicleId::new("IC_0");
        assert_eq!(depot.as_str(), "depot_ZH");
        assert_eq!(vehicle.as_str(), "IC_0");
    }

    #[test]
    fn test_dto_types_are_exported() {
        let data = GanttData { groups: vec![] };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, "{\"groups\":[]}");
    }
}
