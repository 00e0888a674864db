//! Response-side instance model.
//!
//! Mirrors the solver's response JSON (camelCase keys): run info, objective
//! value, and the schedule itself — initial depot loads plus one fleet entry
//! per vehicle type with the assigned vehicles and their event lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{DepotId, VehicleId, VehicleTypeId};

/// A solver run's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default)]
    pub info: Info,
    pub objective_value: ObjectiveValue,
    pub schedule: Schedule,
}

/// Solver run metadata. Fields vary between solver versions, so everything
/// is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    #[serde(default)]
    pub runtime: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub number_of_threads: Option<u32>,
    #[serde(default)]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveValue {
    pub unserved_passengers: i64,
    pub maintenance_violation: i64,
    pub vehicle_count: i64,
    pub costs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub depot_loads: Vec<DepotLoad>,
    #[serde(default)]
    pub fleet: Vec<Fleet>,
}

/// Vehicles present at one depot at schedule start, by vehicle type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotLoad {
    pub depot: DepotId,
    #[serde(default)]
    pub load: Vec<TypeLoad>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeLoad {
    pub vehicle_type: VehicleTypeId,
    pub spawn_count: u32,
}

/// All vehicles of one vehicle type and their assigned events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fleet {
    pub vehicle_type: VehicleTypeId,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub start_depot: DepotId,
    pub end_depot: DepotId,
    #[serde(default)]
    pub departure_segments: Vec<DepartureSegment>,
    #[serde(default)]
    pub maintenance_slots: Vec<VehicleMaintenanceSlot>,
    #[serde(default)]
    pub dead_head_trips: Vec<DeadHeadTrip>,
}

/// A service trip segment driven by a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureSegment {
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

/// A maintenance slot assigned to a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleMaintenanceSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
}

/// An unladen repositioning movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadHeadTrip {
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

impl Schedule {
    /// Depot ids that appear in the initial depot loads.
    pub fn depot_ids(&self) -> Vec<DepotId> {
        self.depot_loads.iter().map(|dl| dl.depot.clone()).collect()
    }

    /// Vehicle type ids in fleet declaration order.
    pub fn vehicle_type_ids(&self) -> Vec<VehicleTypeId> {
        self.fleet.iter().map(|f| f.vehicle_type.clone()).collect()
    }
}
