use aidra_zone::ZoneTable;
use log::info;

use crate::{
    allocation::{allocate_resources, ResourcePools},
    config::AidraConfig,
    demand::estimate_demand,
    error::PipelineError,
    priority::compute_priority,
    severity::compute_adss,
};

/// Run severity, demand, priority and allocation in order.
///
/// The result holds every input column plus all derived columns, sorted by
/// `Priority_Score` descending. The first failing stage aborts the run.
pub fn run_pipeline(
    table: &ZoneTable,
    config: &AidraConfig,
    pools: ResourcePools,
) -> Result<ZoneTable, PipelineError> {
    let scored = compute_adss(table, &config.severity)?;
    let demand = estimate_demand(&scored, &config.demand)?;
    let ranked = compute_priority(&demand, &config.priority)?;
    let allocated = allocate_resources(&ranked, pools)?;
    info!("Pipeline processed {} zones", allocated.len());
    Ok(allocated)
}
