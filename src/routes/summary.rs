//! Instance summary DTOs: headline counts for a scheduling request and
//! the headline objective figures of its response.

use serde::{Deserialize, Serialize};

use crate::models::VehicleTypeId;

/// Route name constant for instance summary endpoints.
pub const GET_INSTANCE_SUMMARY: &str = "get_instance_summary";

/// Headline counts describing the size of a scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub locations: usize,
    pub vehicle_types: usize,
    pub depots: usize,
    /// Sum of the depot-wide capacities that are declared.
    pub depot_capacity: u64,
    pub routes: usize,
    pub departures: usize,
    pub maintenance_slots: usize,
    /// Sum of track counts over all maintenance slots.
    pub maintenance_tracks: u64,
}

/// Vehicles used per vehicle type in a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetCount {
    pub vehicle_type: VehicleTypeId,
    pub vehicles: usize,
}

/// Objective figures and fleet sizes of a solver response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummary {
    pub unserved_passengers: i64,
    pub maintenance_violation: i64,
    pub vehicle_count: i64,
    pub costs: f64,
    pub fleet: Vec<FleetCount>,
}

/// Combined summary returned for one stored instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSummary {
    pub request: RequestSummary,
    pub response: ResponseSummary,
}
