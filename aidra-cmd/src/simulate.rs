//! The `simulate` subcommand: plan every hour of an escalation scenario.

use aidra_data::{
    evaluate_resource_adequacy, run_pipeline, scenario_statistics, simulate_escalation,
    summarize_allocation, ResourceAdequacy, ScenarioStatistics,
};
use log::info;
use serde::Serialize;

use crate::{
    source::{load_config, load_zones, pools},
    PlanArgs, SourceArgs,
};

#[derive(Debug, Serialize)]
pub struct HourReport {
    pub hour: u32,
    pub adequacy: ResourceAdequacy,
    pub ambulance_deficit: u64,
    pub rescue_deficit: u64,
    pub top_zone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub statistics: Option<ScenarioStatistics>,
    pub hours: Vec<HourReport>,
}

pub fn simulate_zones(
    source: &SourceArgs,
    plan: &PlanArgs,
    hours: u32,
    factor: f64,
) -> anyhow::Result<SimulationReport> {
    let config = load_config(plan)?;
    let table = load_zones(source)?;
    let pools = pools(plan);

    let history = simulate_escalation(&table, hours, factor)?;
    let statistics = scenario_statistics(&history);

    let mut reports = Vec::with_capacity(history.len());
    for (hour, snapshot) in (0u32..).zip(&history) {
        let planned = run_pipeline(snapshot, &config, pools)?;
        let summary = summarize_allocation(&planned)?;
        reports.push(HourReport {
            hour,
            adequacy: evaluate_resource_adequacy(&planned, pools),
            ambulance_deficit: summary.ambulances.deficit,
            rescue_deficit: summary.rescue_teams.deficit,
            top_zone: planned.zone_ids().first().cloned(),
        });
    }

    Ok(SimulationReport {
        statistics,
        hours: reports,
    })
}

pub fn run_simulate(
    source: &SourceArgs,
    plan: &PlanArgs,
    hours: u32,
    factor: f64,
    json: bool,
) -> anyhow::Result<()> {
    let report = simulate_zones(source, plan, hours, factor)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(stats) = &report.statistics {
        println!(
            "zones={} hours={} max_rainfall={:.1} avg_rainfall={:.1} peak_hour={}",
            stats.zones, stats.total_hours, stats.max_rainfall, stats.avg_rainfall, stats.peak_hour
        );
    }
    println!("hour,ambulance_coverage,rescue_coverage,ambulance_deficit,rescue_deficit,top_zone");
    for h in &report.hours {
        println!(
            "{},{:.1},{:.1},{},{},{}",
            h.hour,
            h.adequacy.ambulance_coverage,
            h.adequacy.rescue_coverage,
            h.ambulance_deficit,
            h.rescue_deficit,
            h.top_zone.as_deref().unwrap_or("")
        );
    }

    let short = report
        .hours
        .iter()
        .find(|h| !h.adequacy.ambulances_adequate || !h.adequacy.rescue_adequate);
    match short {
        Some(h) => info!("Resources first fall short at hour {}", h.hour),
        None => info!("Resources adequate for all {} hours", report.hours.len()),
    }
    Ok(())
}
