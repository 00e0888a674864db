//! Unified chart catalog DTOs.
//!
//! Every dashboard chart is requested through one endpoint; the payload
//! carries a `category` tag so clients can dispatch on the chart kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routes::active_events::ActiveEventsData;
use crate::routes::depot_loads::DepotLoadsData;
use crate::routes::efficiency::FleetEfficiencyData;
use crate::routes::gantt::GanttData;
use crate::routes::utilization::UtilizationData;

/// Route name constant for the chart catalog endpoint.
pub const GET_CHARTS: &str = "get_charts";

/// The chart kinds the catalog can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartCategory {
    DepotLoads,
    Gantt,
    Utilization,
    ActiveEvents,
    FleetEfficiency,
}

impl ChartCategory {
    /// All categories, in the order the dashboard presents them.
    pub fn all() -> [ChartCategory; 5] {
        [
            ChartCategory::Gantt,
            ChartCategory::DepotLoads,
            ChartCategory::Utilization,
            ChartCategory::ActiveEvents,
            ChartCategory::FleetEfficiency,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartCategory::DepotLoads => "depot_loads",
            ChartCategory::Gantt => "gantt",
            ChartCategory::Utilization => "utilization",
            ChartCategory::ActiveEvents => "active_events",
            ChartCategory::FleetEfficiency => "fleet_efficiency",
        }
    }
}

impl fmt::Display for ChartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raised when a chart category string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart category '{0}'. Available categories: depot_loads, gantt, utilization, active_events, fleet_efficiency")]
pub struct UnknownChartCategory(pub String);

impl FromStr for ChartCategory {
    type Err = UnknownChartCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depot_loads" => Ok(ChartCategory::DepotLoads),
            "gantt" => Ok(ChartCategory::Gantt),
            "utilization" => Ok(ChartCategory::Utilization),
            "active_events" => Ok(ChartCategory::ActiveEvents),
            "fleet_efficiency" => Ok(ChartCategory::FleetEfficiency),
            other => Err(UnknownChartCategory(other.to_string())),
        }
    }
}

/// One chart payload, tagged with its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ChartPayload {
    DepotLoads(DepotLoadsData),
    Gantt(GanttData),
    Utilization(UtilizationData),
    ActiveEvents(ActiveEventsData),
    FleetEfficiency(FleetEfficiencyData),
}

impl ChartPayload {
    pub fn category(&self) -> ChartCategory {
        match self {
            ChartPayload::DepotLoads(_) => ChartCategory::DepotLoads,
            ChartPayload::Gantt(_) => ChartCategory::Gantt,
            ChartPayload::Utilization(_) => ChartCategory::Utilization,
            ChartPayload::ActiveEvents(_) => ChartCategory::ActiveEvents,
            ChartPayload::FleetEfficiency(_) => ChartCategory::FleetEfficiency,
        }
    }
}

/// Chart catalog response for one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartsData {
    pub charts: Vec<ChartPayload>,
}
