//! Request-side instance model.
//!
//! Mirrors the scheduler's request JSON (camelCase keys). Only the parts the
//! analyses consume are modeled; unknown fields are ignored on decode and
//! optional sections default to empty.

use serde::{Deserialize, Serialize};

use super::ids::{DepotId, VehicleTypeId};

/// A scheduling problem instance as handed to the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub vehicle_types: Vec<VehicleType>,
    #[serde(default)]
    pub depots: Vec<Depot>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub departures: Vec<Departure>,
    #[serde(default)]
    pub maintenance_slots: Vec<MaintenanceSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    pub id: VehicleTypeId,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub seats: Option<u32>,
    #[serde(default)]
    pub maximal_formation_count: Option<u32>,
}

/// A depot with its overall capacity and the vehicle types it may hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Depot {
    pub id: DepotId,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub allowed_types: Vec<AllowedVehicleType>,
}

/// Per-type load limit at a depot. A missing capacity means the depot-wide
/// capacity applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedVehicleType {
    pub vehicle_type: VehicleTypeId,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    #[serde(default)]
    pub vehicle_type: Option<VehicleTypeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    pub id: String,
    #[serde(default)]
    pub route: Option<String>,
}

/// A maintenance location offering `track_count` parallel tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSlot {
    pub id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub track_count: u32,
}

impl Depot {
    /// Capacity for a single vehicle type: the per-type limit when declared,
    /// the depot-wide capacity otherwise.
    pub fn capacity_for(&self, vehicle_type: &VehicleTypeId) -> Option<u32> {
        self.allowed_types
            .iter()
            .find(|at| &at.vehicle_type == vehicle_type)
            .and_then(|at| at.capacity)
            .or(self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_decodes_camel_case() {
        let json = r#"{
            "locations": [{"id": "loc_ZH"}],
            "vehicleTypes": [{"id": "IC", "capacity": 600, "seats": 400}],
            "depots": [{
                "id": "depot_ZH",
                "location": "loc_ZH",
                "capacity": 12,
                "allowedTypes": [{"vehicleType": "IC", "capacity": 8}]
            }],
            "routes": [{"id": "route_1", "vehicleType": "IC"}],
            "departures": [{"id": "dep_1", "route": "route_1"}],
            "maintenanceSlots": [{"id": "ms_1", "location": "loc_ZH", "trackCount": 2}]
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(request.depots.len(), 1);
        assert_eq!(request.depots[0].id, DepotId::new("depot_ZH"));
        assert_eq!(request.depots[0].allowed_types[0].capacity, Some(8));
        assert_eq!(request.maintenance_slots[0].track_count, 2);
    }

    #[test]
    fn test_request_tolerates_missing_sections() {
        let request: Request = serde_json::from_str("{}").unwrap();
        assert!(request.depots.is_empty());
        assert!(request.routes.is_empty());
    }

    #[test]
    fn test_capacity_for_falls_back_to_depot_capacity() {
        let depot = Depot {
            id: DepotId::new("depot_BN"),
            location: None,
            capacity: Some(10),
            allowed_types: vec![
                AllowedVehicleType {
                    vehicle_type: VehicleTypeId::new("IC"),
                    capacity: Some(4),
                },
                AllowedVehicleType {
                    vehicle_type: VehicleTypeId::new("RE"),
                    capacity: None,
                },
            ],
        };
        assert_eq!(depot.capacity_for(&VehicleTypeId::new("IC")), Some(4));
        assert_eq!(depot.capacity_for(&VehicleTypeId::new("RE")), Some(10));
        assert_eq!(depot.capacity_for(&VehicleTypeId::new("S")), Some(10));
    }
}
