//! Summary service: headline counts for a request and the objective
//! figures of its response.

use crate::models::{Request, Response};
use crate::routes::summary::{FleetCount, InstanceSummary, RequestSummary, ResponseSummary};

/// Count the entities of a scheduling request.
pub fn request_summary(request: &Request) -> RequestSummary {
    RequestSummary {
        locations: request.locations.len(),
        vehicle_types: request.vehicle_types.len(),
        depots: request.depots.len(),
        depot_capacity: request
            .depots
            .iter()
            .filter_map(|depot| depot.capacity)
            .map(u64::from)
            .sum(),
        routes: request.routes.len(),
        departures: request.departures.len(),
        maintenance_slots: request.maintenance_slots.len(),
        maintenance_tracks: request
            .maintenance_slots
            .iter()
            .map(|slot| u64::from(slot.track_count))
            .sum(),
    }
}

/// Extract the objective figures and per-type fleet sizes of a response.
pub fn response_summary(response: &Response) -> ResponseSummary {
    ResponseSummary {
        unserved_passengers: response.objective_value.unserved_passengers,
        maintenance_violation: response.objective_value.maintenance_violation,
        vehicle_count: response.objective_value.vehicle_count,
        costs: response.objective_value.costs,
        fleet: response
            .schedule
            .fleet
            .iter()
            .map(|fleet| FleetCount {
                vehicle_type: fleet.vehicle_type.clone(),
                vehicles: fleet.vehicles.len(),
            })
            .collect(),
    }
}

/// Build the combined summary for one stored instance.
pub fn compute_instance_summary(request: &Request, response: &Response) -> InstanceSummary {
    InstanceSummary {
        request: request_summary(request),
        response: response_summary(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AllowedVehicleType, Depot, DepotId, Departure, Fleet, Location, MaintenanceSlot,
        ObjectiveValue, Route, Schedule, Vehicle, VehicleId, VehicleType, VehicleTypeId,
    };

    fn create_test_request() -> Request {
        Request {
            locations: vec![
                Location {
                    id: "ZH".to_string(),
                },
                Location {
                    id: "BE".to_string(),
                },
            ],
            vehicle_types: vec![VehicleType {
                id: VehicleTypeId::new("IC"),
                capacity: Some(300),
                seats: Some(250),
                maximal_formation_count: None,
            }],
            depots: vec![
                Depot {
                    id: DepotId::new("depot_ZH"),
                    location: Some("ZH".to_string()),
                    capacity: Some(5),
                    allowed_types: vec![AllowedVehicleType {
                        vehicle_type: VehicleTypeId::new("IC"),
                        capacity: Some(3),
                    }],
                },
                Depot {
                    id: DepotId::new("depot_BE"),
                    location: Some("BE".to_string()),
                    capacity: None,
                    allowed_types: vec![],
                },
            ],
            routes: vec![Route {
                id: "route_1".to_string(),
                vehicle_type: Some(VehicleTypeId::new("IC")),
            }],
            departures: vec![
                Departure {
                    id: "dep_1".to_string(),
                    route: Some("route_1".to_string()),
                },
                Departure {
                    id: "dep_2".to_string(),
                    route: Some("route_1".to_string()),
                },
            ],
            maintenance_slots: vec![MaintenanceSlot {
                id: "slot_1".to_string(),
                location: Some("ZH".to_string()),
                track_count: 2,
            }],
        }
    }

    fn create_test_response() -> Response {
        Response {
            info: Default::default(),
            objective_value: ObjectiveValue {
                unserved_passengers: 0,
                maintenance_violation: 1,
                vehicle_count: 2,
                costs: 9876.5,
            },
            schedule: Schedule {
                depot_loads: vec![],
                fleet: vec![Fleet {
                    vehicle_type: VehicleTypeId::new("IC"),
                    vehicles: vec![
                        Vehicle {
                            id: VehicleId::new("IC_0"),
                            start_depot: DepotId::new("depot_ZH"),
                            end_depot: DepotId::new("depot_ZH"),
                            departure_segments: vec![],
                            maintenance_slots: vec![],
                            dead_head_trips: vec![],
                        },
                        Vehicle {
                            id: VehicleId::new("IC_1"),
                            start_depot: DepotId::new("depot_ZH"),
                            end_depot: DepotId::new("depot_BE"),
                            departure_segments: vec![],
                            maintenance_slots: vec![],
                            dead_head_trips: vec![],
                        },
                    ],
                }],
            },
        }
    }

    #[test]
    fn test_request_summary_counts() {
        let summary = request_summary(&create_test_request());
        assert_eq!(summary.locations, 2);
        assert_eq!(summary.vehicle_types, 1);
        assert_eq!(summary.depots, 2);
        assert_eq!(summary.depot_capacity, 5);
        assert_eq!(summary.routes, 1);
        assert_eq!(summary.departures, 2);
        assert_eq!(summary.maintenance_slots, 1);
        assert_eq!(summary.maintenance_tracks, 2);
    }

    #[test]
    fn test_response_summary_figures() {
        let summary = response_summary(&create_test_response());
        assert_eq!(summary.maintenance_violation, 1);
        assert_eq!(summary.vehicle_count, 2);
        assert_eq!(summary.fleet.len(), 1);
        assert_eq!(summary.fleet[0].vehicles, 2);
    }

    #[test]
    fn test_combined_summary() {
        let summary = compute_instance_summary(&create_test_request(), &create_test_response());
        assert_eq!(summary.request.depots, 2);
        assert_eq!(summary.response.vehicle_count, 2);
    }
}
