use aidra_utils::{rounding::round_count, stats::count_total};
use aidra_zone::{columns, ZoneTable};
use log::info;

use crate::{
    config::DemandFactors,
    error::{column, require, PipelineError, Stage},
};

/// Add injury and resource-need counts to a copy of `table`.
///
/// Every count is rounded half-to-even; see [`round_count`].
pub fn estimate_demand(table: &ZoneTable, factors: &DemandFactors) -> Result<ZoneTable, PipelineError> {
    require(table, Stage::Demand, &[columns::ADSS, columns::POPULATION_DENSITY])?;

    let adss = column(table, Stage::Demand, columns::ADSS)?;
    let density = column(table, Stage::Demand, columns::POPULATION_DENSITY)?;

    let injuries: Vec<u64> = adss
        .iter()
        .zip(&density)
        .map(|(a, d)| round_count(a * d * factors.injury_factor()))
        .collect();
    let ambulances: Vec<u64> = injuries
        .iter()
        .map(|&i| round_count(i as f64 / factors.ambulance_divisor()))
        .collect();
    let rescue: Vec<u64> = adss
        .iter()
        .map(|a| round_count(a * factors.rescue_scaling()))
        .collect();
    let relief: Vec<u64> = density
        .iter()
        .map(|d| round_count(d * factors.relief_factor()))
        .collect();

    info!(
        "Demand estimated: {} ambulances, {} rescue teams, {} relief kits",
        count_total(&ambulances),
        count_total(&rescue),
        count_total(&relief)
    );

    let mut out = table.clone();
    out.set_counts(columns::ESTIMATED_INJURIES, injuries)?;
    out.set_counts(columns::AMBULANCE_NEEDED, ambulances)?;
    out.set_counts(columns::RESCUE_TEAMS_NEEDED, rescue)?;
    out.set_counts(columns::RELIEF_KITS_NEEDED, relief)?;
    Ok(out)
}
