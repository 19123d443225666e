//! Hour-by-hour escalation scenarios for planning.
//!
//! Hazard inputs grow geometrically from the initial table. Forecast rainfall
//! and river level saturate at 1.5x and 2x their initial values.

use aidra_utils::{
    rounding::round_count,
    stats::{count_total, max, mean},
};
use aidra_zone::{columns, ZoneTable};
use log::info;
use serde::Serialize;

use crate::{
    allocation::ResourcePools,
    error::{require, PipelineError, Stage},
};

pub const DEFAULT_HOURS: u32 = 24;
pub const DEFAULT_ESCALATION_FACTOR: f64 = 1.05;

const FORECAST_CAP: f64 = 1.5;
const RIVER_CAP: f64 = 2.0;

/// Snapshots for hours `0..=hours`, each tagged with an `Hour` column.
///
/// At hour `h` every value is the initial value times `factor^h` (capped for
/// forecast and river level), never compounded from the previous hour.
pub fn simulate_escalation(table: &ZoneTable, hours: u32, factor: f64) -> Result<Vec<ZoneTable>, PipelineError> {
    require(
        table,
        Stage::Escalation,
        &[columns::RAINFALL, columns::FORECAST_RAINFALL, columns::RIVER_LEVEL],
    )?;
    info!("Simulating escalation for {} hours with factor {}", hours, factor);

    let mut history = Vec::with_capacity(hours as usize + 1);
    for hour in 0..=hours {
        let mut snapshot = table.clone();
        if hour > 0 {
            let scale = factor.powf(hour as f64);
            snapshot.map_values(columns::RAINFALL, |v| v * scale);
            snapshot.map_values(columns::FORECAST_RAINFALL, |v| v * scale.min(FORECAST_CAP));
            snapshot.map_values(columns::RIVER_LEVEL, |v| v * scale.min(RIVER_CAP));
        }
        snapshot.set_counts(columns::HOUR, vec![u64::from(hour); table.len()])?;
        history.push(snapshot);
    }

    info!("Simulation complete: {} time steps generated", history.len());
    Ok(history)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioStatistics {
    pub max_rainfall: f64,
    /// Mean over hours of the per-hour mean rainfall.
    pub avg_rainfall: f64,
    pub total_hours: usize,
    /// First hour with the largest total rainfall.
    pub peak_hour: usize,
    pub zones: usize,
}

/// Aggregate statistics over a simulated history, or None if it is empty.
pub fn scenario_statistics(history: &[ZoneTable]) -> Option<ScenarioStatistics> {
    let first = history.first()?;
    let rainfall: Vec<Vec<f64>> = history
        .iter()
        .map(|h| h.values(columns::RAINFALL).unwrap_or_default())
        .collect();

    let hourly_max: Vec<f64> = rainfall.iter().filter_map(|r| max(r)).collect();
    let hourly_mean: Vec<f64> = rainfall.iter().filter_map(|r| mean(r)).collect();

    let mut peak_hour = 0;
    let mut peak_sum = f64::NEG_INFINITY;
    for (hour, r) in rainfall.iter().enumerate() {
        let sum: f64 = r.iter().sum();
        if sum > peak_sum {
            peak_sum = sum;
            peak_hour = hour;
        }
    }

    let stats = ScenarioStatistics {
        max_rainfall: max(&hourly_max).unwrap_or(0.0),
        avg_rainfall: mean(&hourly_mean).unwrap_or(0.0),
        total_hours: history.len(),
        peak_hour,
        zones: first.len(),
    };
    info!(
        "Scenario stats: Max rainfall {:.1}mm at hour {}",
        stats.max_rainfall, stats.peak_hour
    );
    Some(stats)
}

/// Whether fixed pools cover the estimated needs of one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResourceAdequacy {
    pub ambulances_adequate: bool,
    pub rescue_adequate: bool,
    /// pool / need * 100, or 100 when nothing is needed
    pub ambulance_coverage: f64,
    pub rescue_coverage: f64,
    /// pool minus need; negative when short
    pub ambulance_surplus: i64,
    pub rescue_surplus: i64,
}

fn total_need(table: &ZoneTable, name: &str) -> u64 {
    match table.counts(name) {
        Some(counts) => count_total(counts),
        None => table
            .values(name)
            .map(|v| count_total(&v.into_iter().map(round_count).collect::<Vec<_>>()))
            .unwrap_or(0),
    }
}

fn coverage(pool: u64, need: u64) -> f64 {
    if need > 0 {
        pool as f64 / need as f64 * 100.0
    } else {
        100.0
    }
}

fn surplus(pool: u64, need: u64) -> i64 {
    (i128::from(pool) - i128::from(need)).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Compare pool sizes against the total need of `table`. Absent need columns
/// count as zero need.
pub fn evaluate_resource_adequacy(table: &ZoneTable, pools: ResourcePools) -> ResourceAdequacy {
    let ambulance_need = total_need(table, columns::AMBULANCE_NEEDED);
    let rescue_need = total_need(table, columns::RESCUE_TEAMS_NEEDED);

    let adequacy = ResourceAdequacy {
        ambulances_adequate: pools.ambulances >= ambulance_need,
        rescue_adequate: pools.rescue_teams >= rescue_need,
        ambulance_coverage: coverage(pools.ambulances, ambulance_need),
        rescue_coverage: coverage(pools.rescue_teams, rescue_need),
        ambulance_surplus: surplus(pools.ambulances, ambulance_need),
        rescue_surplus: surplus(pools.rescue_teams, rescue_need),
    };
    info!(
        "Adequacy check: Ambulances {:.1}%, Rescue {:.1}%",
        adequacy.ambulance_coverage, adequacy.rescue_coverage
    );
    adequacy
}
