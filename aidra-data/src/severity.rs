//! Adaptive Disaster Severity Score (ADSS).
//!
//! ```text
//! hazard        = mean(norm hazard inputs)
//! vulnerability = (mean(norm vulnerability) + 1 - mean(norm resilience)) / 2
//! exposure      = (norm facilities + 1 - norm road access) / 2
//! ADSS          = w_h * hazard + w_v * vulnerability + w_e * exposure
//! ```

use aidra_utils::stats::{min_max, row_means};
use aidra_zone::{columns, ZoneTable};
use log::{debug, info};

use crate::{
    config::SeverityWeights,
    error::{column, require, PipelineError, Stage},
    normalization::min_max_normalize,
};

fn normalized_mean(table: &ZoneTable, names: &[&str]) -> Result<Vec<f64>, PipelineError> {
    let cols = names
        .iter()
        .map(|name| column(table, Stage::Severity, name))
        .collect::<Result<Vec<_>, _>>()?;
    let refs: Vec<&[f64]> = cols.iter().map(Vec::as_slice).collect();
    Ok(row_means(&refs))
}

fn log_range(label: &str, values: &[f64]) {
    if let Some((lo, hi)) = min_max(values) {
        debug!("{} score range: {:.3} - {:.3}", label, lo, hi);
    }
}

/// Add an `ADSS` column in [0, 1] to a copy of `table`.
///
/// Requires every raw input column; rows keep their order.
pub fn compute_adss(table: &ZoneTable, weights: &SeverityWeights) -> Result<ZoneTable, PipelineError> {
    require(table, Stage::Severity, &columns::RAW)?;

    let norm = min_max_normalize(table, &columns::RAW);

    let hazard = normalized_mean(&norm, &columns::HAZARD)?;

    let vuln_pos = normalized_mean(&norm, &columns::VULNERABILITY)?;
    let vuln_inv = normalized_mean(&norm, &columns::INVERSE_VULNERABILITY)?;
    let vulnerability: Vec<f64> = vuln_pos
        .iter()
        .zip(&vuln_inv)
        .map(|(p, i)| (p + (1.0 - i)) / 2.0)
        .collect();

    let exp_pos = normalized_mean(&norm, &columns::EXPOSURE)?;
    let exp_inv = normalized_mean(&norm, &columns::INVERSE_EXPOSURE)?;
    let exposure: Vec<f64> = exp_pos
        .iter()
        .zip(&exp_inv)
        .map(|(p, i)| (p + (1.0 - i)) / 2.0)
        .collect();

    log_range("Hazard", &hazard);
    log_range("Vulnerability", &vulnerability);
    log_range("Exposure", &exposure);

    let adss: Vec<f64> = hazard
        .iter()
        .zip(&vulnerability)
        .zip(&exposure)
        .map(|((h, v), e)| {
            (weights.hazard() * h + weights.vulnerability() * v + weights.exposure() * e).clamp(0.0, 1.0)
        })
        .collect();

    if let Some((lo, hi)) = min_max(&adss) {
        info!("ADSS computed: range {:.3} - {:.3}", lo, hi);
    }

    let mut out = table.clone();
    out.set_real(columns::ADSS, adss)?;
    Ok(out)
}
