//! Fleet efficiency: how each vehicle type's busy hours split across
//! service trips, maintenance, and dead-head repositioning.

use crate::models::Response;
use crate::routes::efficiency::{FleetEfficiencyData, FleetTotals, VehicleTypeEfficiency};
use crate::services::error::AnalysisError;
use crate::services::events::{extract_vehicle_events, EventKind};

/// Compute per-type busy-hour breakdowns and the fleet aggregate.
pub fn compute_fleet_efficiency(response: &Response) -> Result<FleetEfficiencyData, AnalysisError> {
    let mut groups = Vec::with_capacity(response.schedule.fleet.len());
    let mut fleet_service = 0.0;
    let mut fleet_maintenance = 0.0;
    let mut fleet_dead_head = 0.0;

    for fleet in &response.schedule.fleet {
        let mut service = 0.0;
        let mut maintenance = 0.0;
        let mut dead_head = 0.0;
        for vehicle in &fleet.vehicles {
            for event in extract_vehicle_events(&fleet.vehicle_type, vehicle)? {
                match event.kind {
                    EventKind::ServiceTrip => service += event.hours(),
                    EventKind::MaintenanceSlot => maintenance += event.hours(),
                    EventKind::DeadHeadTrip => dead_head += event.hours(),
                }
            }
        }
        groups.push(VehicleTypeEfficiency {
            vehicle_type: fleet.vehicle_type.clone(),
            service_trip_hours: service,
            maintenance_slot_hours: maintenance,
            dead_head_trip_hours: dead_head,
            service_share: share(service, service + maintenance + dead_head),
        });
        fleet_service += service;
        fleet_maintenance += maintenance;
        fleet_dead_head += dead_head;
    }

    let fleet_total = fleet_service + fleet_maintenance + fleet_dead_head;
    Ok(FleetEfficiencyData {
        groups,
        fleet: FleetTotals {
            service_trip_hours: fleet_service,
            maintenance_slot_hours: fleet_maintenance,
            dead_head_trip_hours: fleet_dead_head,
            service_share: share(fleet_service, fleet_total),
        },
    })
}

fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total
    } else {
        0.0
    }
}
