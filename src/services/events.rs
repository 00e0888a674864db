//! Event extraction: normalizes a vehicle's three event lists into one
//! sequence of timed events.
//!
//! Every analysis that walks vehicle events goes through this module, so the
//! `end < start` check happens in exactly one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Fleet, Vehicle, VehicleId, VehicleTypeId};
use crate::services::error::AnalysisError;

/// The three kinds of work a vehicle can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ServiceTrip,
    MaintenanceSlot,
    DeadHeadTrip,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ServiceTrip => "service_trip",
            EventKind::MaintenanceSlot => "maintenance_slot",
            EventKind::DeadHeadTrip => "dead_head_trip",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One timed event of one vehicle. Immutable once extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    pub vehicle_id: VehicleId,
    pub vehicle_type: VehicleTypeId,
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimedEvent {
    /// Event duration in hours.
    pub fn hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }
}

/// Extract all events of a single vehicle, in list order: departure segments,
/// then maintenance slots, then dead-head trips.
pub fn extract_vehicle_events(
    vehicle_type: &VehicleTypeId,
    vehicle: &Vehicle,
) -> Result<Vec<TimedEvent>, AnalysisError> {
    let mut events = Vec::with_capacity(
        vehicle.departure_segments.len()
            + vehicle.maintenance_slots.len()
            + vehicle.dead_head_trips.len(),
    );

    for segment in &vehicle.departure_segments {
        events.push(checked_event(
            vehicle,
            vehicle_type,
            EventKind::ServiceTrip,
            segment.departure,
            segment.arrival,
        )?);
    }
    for slot in &vehicle.maintenance_slots {
        events.push(checked_event(
            vehicle,
            vehicle_type,
            EventKind::MaintenanceSlot,
            slot.start,
            slot.end,
        )?);
    }
    for trip in &vehicle.dead_head_trips {
        events.push(checked_event(
            vehicle,
            vehicle_type,
            EventKind::DeadHeadTrip,
            trip.departure,
            trip.arrival,
        )?);
    }

    Ok(events)
}

/// Extract the events of every vehicle in the fleet, in fleet order.
pub fn extract_fleet_events(fleet: &[Fleet]) -> Result<Vec<TimedEvent>, AnalysisError> {
    let mut events = Vec::new();
    for entry in fleet {
        for vehicle in &entry.vehicles {
            events.extend(extract_vehicle_events(&entry.vehicle_type, vehicle)?);
        }
    }
    Ok(events)
}

/// Check every event of the fleet without materializing them for a caller.
pub fn validate_fleet_events(fleet: &[Fleet]) -> Result<(), AnalysisError> {
    extract_fleet_events(fleet).map(|_| ())
}

fn checked_event(
    vehicle: &Vehicle,
    vehicle_type: &VehicleTypeId,
    kind: EventKind,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<TimedEvent, AnalysisError> {
    if end < start {
        return Err(AnalysisError::malformed_event(
            vehicle.id.clone(),
            kind,
            start,
            end,
        ));
    }
    Ok(TimedEvent {
        vehicle_id: vehicle.id.clone(),
        vehicle_type: vehicle_type.clone(),
        kind,
        start,
        end,
    })
}
