//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the instance
//! store and the HTTP handlers. Services reconstruct depot occupancy,
//! aggregate loads and derive the remaining chart data from a stored
//! scheduling instance.

pub mod active_events;
pub mod charts;
pub mod depot_loads;

pub mod efficiency;
pub mod error;
pub mod events;

pub mod gantt;
pub mod overview;
pub mod summary;
pub mod utilization;

pub use active_events::compute_active_events;
pub use charts::{build_charts, ChartSelection};
pub use depot_loads::{aggregate_cumulative, compute_depot_loads, reconstruct_occupancy};
pub use efficiency::compute_fleet_efficiency;
pub use error::AnalysisError;
pub use events::{extract_fleet_events, extract_vehicle_events, EventKind, TimedEvent};
pub use gantt::compute_gantt;
pub use overview::compute_depot_overview;
pub use summary::{compute_instance_summary, request_summary, response_summary};
pub use utilization::compute_utilization;
