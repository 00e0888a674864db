//! Depot overview service: join declared depot capacities with the spawn
//! counts of the solved schedule.

use std::collections::BTreeMap;

use crate::models::{DepotId, Request, Response, VehicleTypeId};
use crate::routes::overview::{DepotOverviewData, DepotOverviewRow};

/// Build the depot overview table.
///
/// The join is outer in both directions: declared depot/type combinations
/// appear even when the solver spawned nothing there, and spawn counts
/// appear even for combinations the request never declared. Rows are sorted
/// by spawned vehicles in descending order; ties keep the depot/type order.
pub fn compute_depot_overview(request: &Request, response: &Response) -> DepotOverviewData {
    let mut spawned: BTreeMap<(DepotId, VehicleTypeId), u32> = BTreeMap::new();
    for depot_load in &response.schedule.depot_loads {
        for load in &depot_load.load {
            *spawned
                .entry((depot_load.depot.clone(), load.vehicle_type.clone()))
                .or_insert(0) += load.spawn_count;
        }
    }

    let mut rows = Vec::new();
    for depot in &request.depots {
        for allowed in &depot.allowed_types {
            let key = (depot.id.clone(), allowed.vehicle_type.clone());
            let vehicles = spawned.remove(&key).unwrap_or(0);
            rows.push(DepotOverviewRow {
                depot_id: depot.id.clone(),
                vehicle_type: allowed.vehicle_type.clone(),
                vehicle_type_capacity: allowed.capacity.or(depot.capacity),
                capacity: depot.capacity,
                vehicles,
            });
        }
    }

    // Combinations the solver used but the request never declared.
    for ((depot_id, vehicle_type), vehicles) in spawned {
        let capacity = request
            .depots
            .iter()
            .find(|depot| depot.id == depot_id)
            .and_then(|depot| depot.capacity);
        rows.push(DepotOverviewRow {
            depot_id,
            vehicle_type,
            vehicle_type_capacity: capacity,
            capacity,
            vehicles,
        });
    }

    rows.sort_by(|a, b| b.vehicles.cmp(&a.vehicles));
    DepotOverviewData { rows }
}
