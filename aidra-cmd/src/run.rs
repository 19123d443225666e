//! The `run` subcommand: full pipeline over one zone table.

use std::io;

use aidra_data::{run_pipeline, summarize_allocation, AllocationSummary, ResourcePools};
use aidra_zone::ZoneTable;
use chrono::{DateTime, Local};
use log::info;
use serde::Serialize;

use crate::{
    source::{load_config, load_zones, pools},
    PlanArgs, SourceArgs,
};

/// Machine-readable result of one run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Local>,
    pub pools: ResourcePools,
    pub summary: AllocationSummary,
    pub top_zone: Option<String>,
}

/// Run the pipeline and return the annotated table with its report.
pub fn plan_zones(source: &SourceArgs, plan: &PlanArgs) -> anyhow::Result<(ZoneTable, RunReport)> {
    let config = load_config(plan)?;
    let table = load_zones(source)?;
    let pools = pools(plan);

    let planned = run_pipeline(&table, &config, pools)?;
    let summary = summarize_allocation(&planned)?;
    let report = RunReport {
        generated_at: Local::now(),
        pools,
        summary,
        top_zone: planned.zone_ids().first().cloned(),
    };
    Ok((planned, report))
}

pub fn run_plan(
    source: &SourceArgs,
    plan: &PlanArgs,
    output: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let (planned, report) = plan_zones(source, plan)?;

    match output {
        Some(path) => planned.to_csv_path(path)?,
        None => planned.to_csv_writer(io::stdout().lock())?,
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    info!(
        "Run complete at {}: {} zones, top zone {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.summary.zones,
        report.top_zone.as_deref().unwrap_or("-")
    );
    Ok(())
}
