use aidra_utils::{rounding::round_count, stats::count_total};
use aidra_zone::{columns, ZoneTable};
use log::info;
use serde::Serialize;

use crate::error::{column, require, PipelineError, Stage};

/// Totals for one resource type after allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub needed: u64,
    pub allocated: u64,
    pub deficit: u64,
    /// allocated / needed * 100, or 0 when nothing is needed
    pub coverage_pct: f64,
}

impl ResourceSummary {
    fn from_columns(needed: &[f64], allocated: &[f64], deficit: &[f64]) -> Self {
        let total = |v: &[f64]| {
            let counts: Vec<u64> = v.iter().copied().map(round_count).collect();
            count_total(&counts)
        };
        let needed = total(needed);
        let allocated = total(allocated);
        let coverage_pct = if needed > 0 {
            allocated as f64 / needed as f64 * 100.0
        } else {
            0.0
        };
        Self {
            needed,
            allocated,
            deficit: total(deficit),
            coverage_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationSummary {
    pub zones: usize,
    pub ambulances: ResourceSummary,
    pub rescue_teams: ResourceSummary,
}

/// Totals and coverage of an allocated table.
pub fn summarize_allocation(table: &ZoneTable) -> Result<AllocationSummary, PipelineError> {
    let required = [
        columns::AMBULANCE_NEEDED,
        columns::ALLOCATED_AMBULANCES,
        columns::AMBULANCE_DEFICIT,
        columns::RESCUE_TEAMS_NEEDED,
        columns::ALLOCATED_RESCUE_TEAMS,
        columns::RESCUE_DEFICIT,
    ];
    require(table, Stage::Allocation, &required)?;
    let [a_need, a_alloc, a_def, r_need, r_alloc, r_def] = required
        .map(|name| column(table, Stage::Allocation, name));

    let summary = AllocationSummary {
        zones: table.len(),
        ambulances: ResourceSummary::from_columns(&a_need?, &a_alloc?, &a_def?),
        rescue_teams: ResourceSummary::from_columns(&r_need?, &r_alloc?, &r_def?),
    };
    info!(
        "Coverage: ambulances {:.1}% ({}/{}), rescue teams {:.1}% ({}/{})",
        summary.ambulances.coverage_pct,
        summary.ambulances.allocated,
        summary.ambulances.needed,
        summary.rescue_teams.coverage_pct,
        summary.rescue_teams.allocated,
        summary.rescue_teams.needed
    );
    Ok(summary)
}
