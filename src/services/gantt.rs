//! Vehicle-circuit Gantt data, one group per vehicle type.

use crate::models::Response;
use crate::routes::gantt::{GanttBlock, GanttData, VehicleTypeGantt};
use crate::services::error::AnalysisError;
use crate::services::events::extract_vehicle_events;

/// Build Gantt blocks for every vehicle type in the fleet.
///
/// Blocks keep fleet order: vehicles as declared, and within a vehicle its
/// service segments, maintenance slots, and dead-head trips in list order.
pub fn compute_gantt(response: &Response) -> Result<GanttData, AnalysisError> {
    let mut groups = Vec::with_capacity(response.schedule.fleet.len());

    for fleet in &response.schedule.fleet {
        let mut blocks = Vec::new();
        for vehicle in &fleet.vehicles {
            for event in extract_vehicle_events(&fleet.vehicle_type, vehicle)? {
                blocks.push(GanttBlock {
                    vehicle_id: event.vehicle_id,
                    kind: event.kind,
                    start: event.start,
                    end: event.end,
                });
            }
        }
        groups.push(VehicleTypeGantt {
            vehicle_type: fleet.vehicle_type.clone(),
            blocks,
        });
    }

    Ok(GanttData { groups })
}
