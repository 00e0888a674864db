//! Chart catalog service: one parameterized entry point that builds any
//! selection of dashboard charts from a stored instance.

use crate::models::{DepotId, Request, Response};
use crate::routes::charts::{ChartCategory, ChartPayload, ChartsData};
use crate::services::active_events::compute_active_events;
use crate::services::depot_loads::compute_depot_loads;
use crate::services::efficiency::compute_fleet_efficiency;
use crate::services::error::AnalysisError;
use crate::services::gantt::compute_gantt;
use crate::services::utilization::compute_utilization;

/// Which charts to build, and for which depot where one is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSelection {
    pub categories: Vec<ChartCategory>,
    pub depot_id: Option<DepotId>,
}

impl ChartSelection {
    /// Selection covering every category.
    pub fn all(depot_id: Option<DepotId>) -> Self {
        ChartSelection {
            categories: ChartCategory::all().to_vec(),
            depot_id,
        }
    }
}

/// Build the selected charts in selection order.
///
/// The depot-loads chart needs a depot id; when the selection carries none
/// that chart is skipped so the remaining charts still render.
pub fn build_charts(
    request: &Request,
    response: &Response,
    selection: &ChartSelection,
) -> Result<ChartsData, AnalysisError> {
    let mut charts = Vec::with_capacity(selection.categories.len());
    for category in &selection.categories {
        match category {
            ChartCategory::DepotLoads => match &selection.depot_id {
                Some(depot_id) => charts.push(ChartPayload::DepotLoads(compute_depot_loads(
                    request, response, depot_id,
                )?)),
                None => {
                    log::debug!("skipping depot loads chart: no depot selected");
                }
            },
            ChartCategory::Gantt => {
                charts.push(ChartPayload::Gantt(compute_gantt(response)?));
            }
            ChartCategory::Utilization => {
                charts.push(ChartPayload::Utilization(compute_utilization(response)?));
            }
            ChartCategory::ActiveEvents => {
                charts.push(ChartPayload::ActiveEvents(compute_active_events(response)?));
            }
            ChartCategory::FleetEfficiency => {
                charts.push(ChartPayload::FleetEfficiency(compute_fleet_efficiency(
                    response,
                )?));
            }
        }
    }
    Ok(ChartsData { charts })
}
