//! Depot vehicle-load reconstruction.
//!
//! From the response's per-vehicle event timelines this service rebuilds, for
//! one depot, the vehicle count over time per vehicle type plus a fleet-wide
//! cumulative load series, annotated with the depot capacity declared in the
//! request. The whole computation is a single pass over pre-sorted immutable
//! data; nothing here touches shared state.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::{DepotId, DepotLoad, Fleet, Request, Response, Vehicle, VehicleId};
use crate::routes::depot_loads::{
    CumulativeLoadPoint, DepotLoadsData, InventoryWarning, OccupancyEvent, OccupancyKind,
    VehicleTypeSeries,
};
use crate::services::error::AnalysisError;
use crate::services::events::validate_fleet_events;

/// Result of [`reconstruct_occupancy`]: one ordered series per vehicle type
/// plus any inventory warnings raised during the fold.
#[derive(Debug, Clone, Default)]
pub struct OccupancyReconstruction {
    pub series: Vec<VehicleTypeSeries>,
    pub warnings: Vec<InventoryWarning>,
}

/// A departure from or arrival at the target depot, before boundary events
/// and running counts are attached.
#[derive(Debug, Clone)]
struct Movement {
    time: DateTime<Utc>,
    vehicle_id: VehicleId,
    kind: OccupancyKind,
}

/// Compute the full depot loads dataset for one depot: per-type occupancy
/// series, fleet-wide cumulative series, capacity threshold, and warnings.
///
/// Fails with [`AnalysisError::InvalidDepot`] when `depot_id` has no entry in
/// the schedule's depot loads, and with [`AnalysisError::MalformedEvent`]
/// when any event of the fleet ends before it starts.
pub fn compute_depot_loads(
    request: &Request,
    response: &Response,
    depot_id: &DepotId,
) -> Result<DepotLoadsData, AnalysisError> {
    validate_fleet_events(&response.schedule.fleet)?;

    let reconstruction = reconstruct_occupancy(
        depot_id,
        &response.schedule.fleet,
        &response.schedule.depot_loads,
    )?;
    let cumulative = aggregate_cumulative(&reconstruction.series);
    let capacity = depot_capacity(request, depot_id);

    Ok(DepotLoadsData {
        depot_id: depot_id.clone(),
        capacity,
        series: reconstruction.series,
        cumulative,
        warnings: reconstruction.warnings,
    })
}

/// Reconstruct the per-vehicle-type occupancy series for one depot.
///
/// A vehicle whose `start_depot` matches contributes one Departure at the
/// earliest start among its events; a vehicle whose `end_depot` matches
/// contributes one Arrival at the latest such start (see
/// [`latest_activity_start`] for why starts, not ends). Each vehicle type is
/// bracketed by synthetic Initial/Final events one hour outside the observed
/// range, and the running count is folded in time order: Departure −1,
/// Arrival +1, starting from the declared initial load.
///
/// A vehicle type declared in the depot loads but without movements still
/// yields a flat Initial/Final series. A depot with no movements at all has
/// no time anchor for the boundaries and yields an empty reconstruction.
pub fn reconstruct_occupancy(
    depot_id: &DepotId,
    fleet: &[Fleet],
    depot_loads: &[DepotLoad],
) -> Result<OccupancyReconstruction, AnalysisError> {
    if !depot_loads.iter().any(|dl| &dl.depot == depot_id) {
        let known = depot_loads.iter().map(|dl| dl.depot.clone()).collect();
        return Err(AnalysisError::invalid_depot(depot_id.clone(), known));
    }

    // Declared initial counts per vehicle type at this depot.
    let mut initial_counts: BTreeMap<_, i64> = BTreeMap::new();
    for depot_load in depot_loads.iter().filter(|dl| &dl.depot == depot_id) {
        for load in &depot_load.load {
            initial_counts.insert(load.vehicle_type.clone(), i64::from(load.spawn_count));
        }
    }

    // Departures and arrivals per vehicle type, in fleet order.
    let mut movements: BTreeMap<_, Vec<Movement>> = BTreeMap::new();
    for entry in fleet {
        for vehicle in &entry.vehicles {
            if vehicle.start_depot == *depot_id {
                if let Some(time) = earliest_activity_start(vehicle) {
                    movements
                        .entry(entry.vehicle_type.clone())
                        .or_default()
                        .push(Movement {
                            time,
                            vehicle_id: vehicle.id.clone(),
                            kind: OccupancyKind::Departure,
                        });
                }
            }
            if vehicle.end_depot == *depot_id {
                if let Some(time) = latest_activity_start(vehicle) {
                    movements
                        .entry(entry.vehicle_type.clone())
                        .or_default()
                        .push(Movement {
                            time,
                            vehicle_id: vehicle.id.clone(),
                            kind: OccupancyKind::Arrival,
                        });
                }
            }
        }
    }

    let Some((min_time, max_time)) = movement_time_range(&movements) else {
        return Ok(OccupancyReconstruction::default());
    };
    let initial_time = min_time - Duration::hours(1);
    let final_time = max_time + Duration::hours(1);

    // Union of declared and observed vehicle types, in id order.
    let mut vehicle_types: Vec<_> = initial_counts.keys().cloned().collect();
    for vehicle_type in movements.keys() {
        if !vehicle_types.contains(vehicle_type) {
            vehicle_types.push(vehicle_type.clone());
        }
    }
    vehicle_types.sort();

    let mut series = Vec::with_capacity(vehicle_types.len());
    let mut warnings = Vec::new();

    for vehicle_type in vehicle_types {
        let mut units = initial_counts.get(&vehicle_type).copied().unwrap_or(0);
        let mut events = vec![OccupancyEvent {
            time: initial_time,
            vehicle_type: vehicle_type.clone(),
            vehicle_id: None,
            kind: OccupancyKind::Initial,
            units,
        }];

        let mut type_movements = movements.remove(&vehicle_type).unwrap_or_default();
        type_movements.sort_by_key(|m| m.time);

        for movement in type_movements {
            match movement.kind {
                OccupancyKind::Departure => units -= 1,
                OccupancyKind::Arrival => units += 1,
                _ => {}
            }
            if units < 0 {
                log::warn!(
                    "depot '{}': running count for vehicle type '{}' dropped to {} at {}",
                    depot_id,
                    vehicle_type,
                    units,
                    movement.time
                );
                warnings.push(InventoryWarning {
                    depot_id: depot_id.clone(),
                    vehicle_type: vehicle_type.clone(),
                    time: movement.time,
                    units,
                });
            }
            events.push(OccupancyEvent {
                time: movement.time,
                vehicle_type: vehicle_type.clone(),
                vehicle_id: Some(movement.vehicle_id),
                kind: movement.kind,
                units,
            });
        }

        events.push(OccupancyEvent {
            time: final_time,
            vehicle_type: vehicle_type.clone(),
            vehicle_id: None,
            kind: OccupancyKind::Final,
            units,
        });

        series.push(VehicleTypeSeries {
            vehicle_type,
            events,
        });
    }

    Ok(OccupancyReconstruction { series, warnings })
}

/// Fold all per-type series into one fleet-wide cumulative load series.
///
/// The starting total is the sum of the per-type Initial counts; every
/// Departure/Arrival across all types is then applied in global time order
/// (stable among same-instant events, which cannot change the totals). The
/// series opens at the Initial boundary and closes at the Final boundary.
pub fn aggregate_cumulative(series: &[VehicleTypeSeries]) -> Vec<CumulativeLoadPoint> {
    if series.is_empty() {
        return Vec::new();
    }

    let seed: i64 = series
        .iter()
        .filter_map(|s| s.events.iter().find(|e| e.kind == OccupancyKind::Initial))
        .map(|e| e.units)
        .sum();
    let open_time = series
        .iter()
        .filter_map(|s| s.events.first())
        .map(|e| e.time)
        .min();
    let close_time = series
        .iter()
        .filter_map(|s| s.events.last())
        .map(|e| e.time)
        .max();

    let mut movements: Vec<&OccupancyEvent> = series
        .iter()
        .flat_map(|s| s.events.iter())
        .filter(|e| matches!(e.kind, OccupancyKind::Departure | OccupancyKind::Arrival))
        .collect();
    movements.sort_by_key(|e| e.time);

    let mut total = seed;
    let mut points = Vec::with_capacity(movements.len() + 2);
    if let Some(time) = open_time {
        points.push(CumulativeLoadPoint {
            time,
            total_units: total,
        });
    }
    for event in movements {
        match event.kind {
            OccupancyKind::Departure => total -= 1,
            OccupancyKind::Arrival => total += 1,
            _ => {}
        }
        points.push(CumulativeLoadPoint {
            time: event.time,
            total_units: total,
        });
    }
    if let Some(time) = close_time {
        points.push(CumulativeLoadPoint {
            time,
            total_units: total,
        });
    }
    points
}

/// Declared capacity of a depot, if the request declares one.
///
/// An unknown depot or a depot without a capacity both yield `None`; an
/// unconstrained depot is a valid state, not an error.
pub fn depot_capacity(request: &Request, depot_id: &DepotId) -> Option<u32> {
    request
        .depots
        .iter()
        .find(|depot| &depot.id == depot_id)
        .and_then(|depot| depot.capacity)
}

/// Earliest start among a vehicle's service segments, maintenance slots, and
/// dead-head trips. `None` when the vehicle has no events at all.
pub fn earliest_activity_start(vehicle: &Vehicle) -> Option<DateTime<Utc>> {
    let first_departure = vehicle.departure_segments.iter().map(|s| s.departure).min();
    let first_maintenance = vehicle.maintenance_slots.iter().map(|s| s.start).min();
    let first_dead_head = vehicle.dead_head_trips.iter().map(|t| t.departure).min();

    [first_departure, first_maintenance, first_dead_head]
        .into_iter()
        .flatten()
        .min()
}

/// Latest start among the same three event lists, used as the proxy for a
/// vehicle's return time to its end depot.
///
/// This deliberately reads the departure-side timestamps (segment departure,
/// maintenance start, dead-head departure), never the end timestamps. The
/// upstream dashboard has always modeled "last activity start" as the return
/// time; keep it that way so reconstructed series stay comparable across
/// tools, even though a true arrival timestamp would be later.
pub fn latest_activity_start(vehicle: &Vehicle) -> Option<DateTime<Utc>> {
    let last_departure = vehicle.departure_segments.iter().map(|s| s.departure).max();
    let last_maintenance = vehicle.maintenance_slots.iter().map(|s| s.start).max();
    let last_dead_head = vehicle.dead_head_trips.iter().map(|t| t.departure).max();

    [last_departure, last_maintenance, last_dead_head]
        .into_iter()
        .flatten()
        .max()
}

fn movement_time_range(
    movements: &BTreeMap<crate::models::VehicleTypeId, Vec<Movement>>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let times = movements.values().flatten().map(|m| m.time);
    let min = times.clone().min()?;
    let max = times.max()?;
    Some((min, max))
}
