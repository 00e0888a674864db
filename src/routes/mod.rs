pub mod active_events;
pub mod charts;
pub mod depot_loads;
pub mod efficiency;
pub mod gantt;
pub mod landing;
pub mod overview;
pub mod summary;
pub mod utilization;
