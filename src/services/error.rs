//! Error types for the analysis services.

use chrono::{DateTime, Utc};

use crate::models::{DepotId, VehicleId};
use crate::services::events::EventKind;

/// Fatal input errors detected while analysing an instance.
///
/// These abort the single computation they occur in; the caller decides how
/// to present them. The computations are deterministic, so nothing retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// The requested depot does not appear in the schedule's depot loads.
    #[error("depot '{depot_id}' is not valid. Available depot ids: {known:?}")]
    InvalidDepot {
        depot_id: DepotId,
        known: Vec<DepotId>,
    },

    /// An event ends before it starts. Masking this would corrupt every
    /// running-count fold downstream, so it is propagated immediately.
    #[error("{kind} of vehicle '{vehicle_id}' ends at {end} before its start at {start}")]
    MalformedEvent {
        vehicle_id: VehicleId,
        kind: EventKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl AnalysisError {
    pub fn invalid_depot(depot_id: DepotId, known: Vec<DepotId>) -> Self {
        AnalysisError::InvalidDepot { depot_id, known }
    }

    pub fn malformed_event(
        vehicle_id: VehicleId,
        kind: EventKind,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        AnalysisError::MalformedEvent {
            vehicle_id,
            kind,
            start,
            end,
        }
    }
}
