//! Property-based tests for the occupancy reconstruction fold.
//!
//! Scenarios are generated from scalar specs and are valid by construction
//! (every event ends at or after its start), so the properties exercise the
//! fold itself rather than input validation.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use rssched_rust::api::{DepotId, OccupancyKind, VehicleId, VehicleTypeId};
use rssched_rust::models::{DeadHeadTrip, DepartureSegment, DepotLoad, Fleet, TypeLoad, Vehicle};
use rssched_rust::services::{aggregate_cumulative, reconstruct_occupancy};

const TARGET: &str = "depot_ZH";
const OTHER: &str = "depot_BN";

/// One generated vehicle: depot/event-kind flags, start offset in minutes,
/// duration in minutes.
type VehicleSpec = (u8, i64, i64);

fn vehicle_specs() -> impl Strategy<Value = Vec<VehicleSpec>> {
    prop::collection::vec((0u8..8, 0i64..1440, 0i64..360), 0..12)
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 7, 24, 4, 0, 0).unwrap()
}

/// Expand the specs into a two-type fleet. Flag bit 0 picks the start depot,
/// bit 1 the end depot, bit 2 whether the single event is a service segment
/// or a dead-head trip. Even indices become IC vehicles, odd ones RE.
fn build_fleet(specs: &[VehicleSpec]) -> Vec<Fleet> {
    let mut ic = Vec::new();
    let mut re = Vec::new();
    for (i, &(flags, offset, duration)) in specs.iter().enumerate() {
        let departure = base_time() + Duration::minutes(offset);
        let arrival = departure + Duration::minutes(duration);
        let start_depot = if flags & 1 == 0 { TARGET } else { OTHER };
        let end_depot = if flags & 2 == 0 { TARGET } else { OTHER };
        let mut vehicle = Vehicle {
            id: VehicleId::new(format!("v_{i}")),
            start_depot: DepotId::new(start_depot),
            end_depot: DepotId::new(end_depot),
            departure_segments: vec![],
            maintenance_slots: vec![],
            dead_head_trips: vec![],
        };
        if flags & 4 == 0 {
            vehicle.departure_segments.push(DepartureSegment {
                departure,
                arrival,
                origin: None,
                destination: None,
            });
        } else {
            vehicle.dead_head_trips.push(DeadHeadTrip {
                departure,
                arrival,
                origin: None,
                destination: None,
            });
        }
        if i % 2 == 0 {
            ic.push(vehicle);
        } else {
            re.push(vehicle);
        }
    }
    vec![
        Fleet {
            vehicle_type: VehicleTypeId::new("IC"),
            vehicles: ic,
        },
        Fleet {
            vehicle_type: VehicleTypeId::new("RE"),
            vehicles: re,
        },
    ]
}

fn build_loads(ic_spawn: u32, re_spawn: u32) -> Vec<DepotLoad> {
    vec![
        DepotLoad {
            depot: DepotId::new(TARGET),
            load: vec![
                TypeLoad {
                    vehicle_type: VehicleTypeId::new("IC"),
                    spawn_count: ic_spawn,
                },
                TypeLoad {
                    vehicle_type: VehicleTypeId::new("RE"),
                    spawn_count: re_spawn,
                },
            ],
        },
        DepotLoad {
            depot: DepotId::new(OTHER),
            load: vec![],
        },
    ]
}

proptest! {
    #[test]
    fn prop_final_units_reconcile_with_movements(
        specs in vehicle_specs(),
        ic_spawn in 0u32..6,
        re_spawn in 0u32..6,
    ) {
        let fleet = build_fleet(&specs);
        let loads = build_loads(ic_spawn, re_spawn);
        let result = reconstruct_occupancy(&DepotId::new(TARGET), &fleet, &loads).unwrap();

        for series in &result.series {
            let initial = series.events.first().unwrap().units;
            let departures = series
                .events
                .iter()
                .filter(|e| e.kind == OccupancyKind::Departure)
                .count() as i64;
            let arrivals = series
                .events
                .iter()
                .filter(|e| e.kind == OccupancyKind::Arrival)
                .count() as i64;
            prop_assert_eq!(
                series.events.last().unwrap().units,
                initial - departures + arrivals
            );
        }
    }

    #[test]
    fn prop_series_open_and_close_one_hour_outside(
        specs in vehicle_specs(),
        ic_spawn in 0u32..6,
    ) {
        let fleet = build_fleet(&specs);
        let loads = build_loads(ic_spawn, 0);
        let result = reconstruct_occupancy(&DepotId::new(TARGET), &fleet, &loads).unwrap();

        let movement_times: Vec<_> = result
            .series
            .iter()
            .flat_map(|s| s.events.iter())
            .filter(|e| e.vehicle_id.is_some())
            .map(|e| e.time)
            .collect();

        for series in &result.series {
            let first = series.events.first().unwrap();
            let last = series.events.last().unwrap();
            prop_assert_eq!(first.kind, OccupancyKind::Initial);
            prop_assert_eq!(last.kind, OccupancyKind::Final);
            // All types share one pair of boundaries, one hour outside the
            // observed movement range.
            if let (Some(&min), Some(&max)) =
                (movement_times.iter().min(), movement_times.iter().max())
            {
                prop_assert_eq!(first.time, min - Duration::hours(1));
                prop_assert_eq!(last.time, max + Duration::hours(1));
            }
            for pair in series.events.windows(2) {
                prop_assert!(pair[0].time <= pair[1].time);
            }
        }
    }

    #[test]
    fn prop_cumulative_brackets_series_totals(
        specs in vehicle_specs(),
        ic_spawn in 0u32..6,
        re_spawn in 0u32..6,
    ) {
        let fleet = build_fleet(&specs);
        let loads = build_loads(ic_spawn, re_spawn);
        let result = reconstruct_occupancy(&DepotId::new(TARGET), &fleet, &loads).unwrap();
        let cumulative = aggregate_cumulative(&result.series);

        if result.series.is_empty() {
            prop_assert!(cumulative.is_empty());
            return Ok(());
        }

        let initial_sum: i64 = result
            .series
            .iter()
            .map(|s| s.events.first().unwrap().units)
            .sum();
        let final_sum: i64 = result
            .series
            .iter()
            .map(|s| s.events.last().unwrap().units)
            .sum();
        let movement_count = result
            .series
            .iter()
            .flat_map(|s| s.events.iter())
            .filter(|e| e.vehicle_id.is_some())
            .count();

        prop_assert_eq!(cumulative.len(), movement_count + 2);
        prop_assert_eq!(cumulative.first().unwrap().total_units, initial_sum);
        prop_assert_eq!(cumulative.last().unwrap().total_units, final_sum);
        for pair in cumulative.windows(2) {
            prop_assert!(pair[0].time <= pair[1].time);
            prop_assert!((pair[0].total_units - pair[1].total_units).abs() <= 1);
        }
    }

    #[test]
    fn prop_warnings_point_at_negative_dips(
        specs in vehicle_specs(),
        ic_spawn in 0u32..3,
    ) {
        let fleet = build_fleet(&specs);
        let loads = build_loads(ic_spawn, 0);
        let result = reconstruct_occupancy(&DepotId::new(TARGET), &fleet, &loads).unwrap();

        for warning in &result.warnings {
            prop_assert!(warning.units < 0);
            let series = result
                .series
                .iter()
                .find(|s| s.vehicle_type == warning.vehicle_type)
                .unwrap();
            prop_assert!(series
                .events
                .iter()
                .any(|e| e.time == warning.time && e.units == warning.units));
        }
        // And the converse: a series dipping below zero must have warned.
        for series in &result.series {
            let dipped = series.events.iter().any(|e| e.units < 0);
            let warned = result
                .warnings
                .iter()
                .any(|w| w.vehicle_type == series.vehicle_type);
            prop_assert_eq!(dipped, warned);
        }
    }

    #[test]
    fn prop_reconstruction_is_deterministic(
        specs in vehicle_specs(),
        ic_spawn in 0u32..6,
        re_spawn in 0u32..6,
    ) {
        let fleet = build_fleet(&specs);
        let loads = build_loads(ic_spawn, re_spawn);
        let depot = DepotId::new(TARGET);

        let first = reconstruct_occupancy(&depot, &fleet, &loads).unwrap();
        let second = reconstruct_occupancy(&depot, &fleet, &loads).unwrap();
        prop_assert_eq!(&first.series, &second.series);
        prop_assert_eq!(&first.warnings, &second.warnings);
        prop_assert_eq!(
            aggregate_cumulative(&first.series),
            aggregate_cumulative(&second.series)
        );
    }
}
