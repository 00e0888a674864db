//! Vehicle utilization: service-trip hours per vehicle, grouped by type.

use std::collections::BTreeMap;

use crate::models::Response;
use crate::routes::utilization::{UtilizationData, VehicleTypeUtilization, VehicleUtilization};
use crate::services::error::AnalysisError;
use crate::services::events::{extract_vehicle_events, EventKind};

/// Sum each vehicle's service-trip hours and rank vehicles within their type.
///
/// Only service trips count toward utilization; maintenance and dead-heads
/// are busy time but not revenue service. Vehicles without any service
/// segment do not appear.
pub fn compute_utilization(response: &Response) -> Result<UtilizationData, AnalysisError> {
    let mut groups = Vec::with_capacity(response.schedule.fleet.len());

    for fleet in &response.schedule.fleet {
        // BTreeMap keeps a deterministic vehicle order before ranking.
        let mut hours_by_vehicle: BTreeMap<_, f64> = BTreeMap::new();
        for vehicle in &fleet.vehicles {
            for event in extract_vehicle_events(&fleet.vehicle_type, vehicle)? {
                if event.kind == EventKind::ServiceTrip {
                    *hours_by_vehicle.entry(event.vehicle_id).or_insert(0.0) += event.hours();
                }
            }
        }
        if hours_by_vehicle.is_empty() {
            continue;
        }

        let mut vehicles: Vec<VehicleUtilization> = hours_by_vehicle
            .into_iter()
            .map(|(vehicle_id, service_hours)| VehicleUtilization {
                vehicle_id,
                service_hours,
            })
            .collect();
        vehicles.sort_by(|a, b| {
            b.service_hours
                .partial_cmp(&a.service_hours)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mean_service_hours =
            vehicles.iter().map(|v| v.service_hours).sum::<f64>() / vehicles.len() as f64;

        groups.push(VehicleTypeUtilization {
            vehicle_type: fleet.vehicle_type.clone(),
            vehicles,
            mean_service_hours,
        });
    }

    Ok(UtilizationData { groups })
}
