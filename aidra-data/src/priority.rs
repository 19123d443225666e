use aidra_utils::stats::finite_max;
use aidra_zone::{columns, ZoneTable};
use log::{info, warn};

use crate::{
    config::PriorityWeights,
    error::{column, require, PipelineError, Stage},
};

/// Medical deficit used when every zone reports zero hospital capacity.
pub const NEUTRAL_MEDICAL_DEFICIT: f64 = 0.5;

const REQUIRED: [&str; 4] = [
    columns::ADSS,
    columns::POPULATION_DENSITY,
    columns::HOSPITAL_CAPACITY,
    columns::ROAD_ACCESS,
];

/// Clamp into [0, 1], replacing NaN with `nan`.
fn unit(value: f64, nan: f64) -> f64 {
    if value.is_nan() {
        nan
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Score zones for deployment and sort them by `Priority_Score`, highest
/// first. Ties keep their input order.
///
/// Adds `Medical_Deficit` and `Priority_Score`, both kept in [0, 1] even for
/// negative or non-finite inputs.
pub fn compute_priority(table: &ZoneTable, weights: &PriorityWeights) -> Result<ZoneTable, PipelineError> {
    require(table, Stage::Priority, &REQUIRED)?;

    let adss = column(table, Stage::Priority, columns::ADSS)?;
    let density = column(table, Stage::Priority, columns::POPULATION_DENSITY)?;
    let capacity = column(table, Stage::Priority, columns::HOSPITAL_CAPACITY)?;
    let road = column(table, Stage::Priority, columns::ROAD_ACCESS)?;

    let medical_deficit: Vec<f64> = match finite_max(&capacity) {
        Some(m) if m != 0.0 => capacity
            .iter()
            .map(|c| unit(1.0 - c / m, NEUTRAL_MEDICAL_DEFICIT))
            .collect(),
        _ => {
            warn!(
                "Hospital capacity is zero in every zone, using neutral medical deficit {}",
                NEUTRAL_MEDICAL_DEFICIT
            );
            vec![NEUTRAL_MEDICAL_DEFICIT; table.len()]
        }
    };

    let population: Vec<f64> = match finite_max(&density) {
        Some(m) if m > 0.0 => density.iter().map(|d| unit(d / m, 0.0)).collect(),
        _ => {
            warn!("Maximum population density is not positive, normalized population set to 0");
            vec![0.0; table.len()]
        }
    };

    let raw: Vec<f64> = (0..table.len())
        .map(|i| {
            weights.adss * adss[i]
                + weights.population * population[i]
                + weights.medical * medical_deficit[i]
                + weights.accessibility * (1.0 - road[i])
        })
        .collect();

    let top = finite_max(&raw).filter(|m| *m > 0.0);
    let score: Vec<f64> = raw
        .iter()
        .map(|s| match top {
            Some(top) if s.is_finite() => unit(s / top, 0.0),
            _ => unit(*s, 0.0),
        })
        .collect();

    let mut out = table.clone();
    out.set_real(columns::MEDICAL_DEFICIT, medical_deficit)?;
    out.set_real(columns::PRIORITY_SCORE, score.clone())?;

    // stable
    let mut order: Vec<usize> = (0..score.len()).collect();
    order.sort_by(|&a, &b| score[b].total_cmp(&score[a]));
    let out = out.permuted(&order);

    if let (Some(zone), Some(&i)) = (out.zone_ids().first(), order.first()) {
        info!("Priority computed. Top zone: {} (score {:.3})", zone, score[i]);
    }
    Ok(out)
}
