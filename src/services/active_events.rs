//! Active-event sampling: how many events of each kind run at a given time.
//!
//! The schedule span of each vehicle type is sampled on a 15-minute grid
//! aligned to quarter hours. An event counts as active at sample instant `t`
//! when `start <= t < end`, so a count is a snapshot at the grid point, not
//! an overlap with the surrounding interval.

use chrono::{DateTime, Duration, Utc};

use crate::models::Response;
use crate::routes::active_events::{ActiveEventsData, ActiveEventsPoint, VehicleTypeActiveEvents};
use crate::services::error::AnalysisError;
use crate::services::events::{extract_vehicle_events, EventKind, TimedEvent};

const SAMPLE_STEP_SECONDS: i64 = 15 * 60;

/// Sample active-event counts per vehicle type on the quarter-hour grid from
/// the type's earliest start (floored) to its latest end (ceiled), inclusive.
pub fn compute_active_events(response: &Response) -> Result<ActiveEventsData, AnalysisError> {
    let mut groups = Vec::with_capacity(response.schedule.fleet.len());

    for fleet in &response.schedule.fleet {
        let mut events: Vec<TimedEvent> = Vec::new();
        for vehicle in &fleet.vehicles {
            events.extend(extract_vehicle_events(&fleet.vehicle_type, vehicle)?);
        }
        let Some(first_start) = events.iter().map(|e| e.start).min() else {
            continue;
        };
        let last_end = events.iter().map(|e| e.end).max().unwrap_or(first_start);

        let mut points = Vec::new();
        let mut sample = floor_to_grid(first_start);
        let span_end = ceil_to_grid(last_end);
        while sample <= span_end {
            let mut point = ActiveEventsPoint {
                time: sample,
                service_trips: 0,
                maintenance_slots: 0,
                dead_head_trips: 0,
            };
            for event in &events {
                if event.start <= sample && sample < event.end {
                    match event.kind {
                        EventKind::ServiceTrip => point.service_trips += 1,
                        EventKind::MaintenanceSlot => point.maintenance_slots += 1,
                        EventKind::DeadHeadTrip => point.dead_head_trips += 1,
                    }
                }
            }
            points.push(point);
            sample += Duration::seconds(SAMPLE_STEP_SECONDS);
        }

        groups.push(VehicleTypeActiveEvents {
            vehicle_type: fleet.vehicle_type.clone(),
            points,
        });
    }

    Ok(ActiveEventsData { groups })
}

/// Round down to the previous quarter hour (identity on grid points).
fn floor_to_grid(time: DateTime<Utc>) -> DateTime<Utc> {
    let rem = time.timestamp().rem_euclid(SAMPLE_STEP_SECONDS);
    time - Duration::seconds(rem) - Duration::nanoseconds(i64::from(time.timestamp_subsec_nanos()))
}

/// Round up to the next quarter hour (identity on grid points).
fn ceil_to_grid(time: DateTime<Utc>) -> DateTime<Utc> {
    let floored = floor_to_grid(time);
    if floored == time {
        time
    } else {
        floored + Duration::seconds(SAMPLE_STEP_SECONDS)
    }
}
