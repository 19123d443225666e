//! Pipeline configuration.
//!
//! Defaults reproduce the reference weights. A config file (JSON) may
//! override any subset of fields; omitted fields keep their defaults.
//! Validation happens at construction, so a value of [`AidraConfig`] is
//! always usable by every stage.

use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ADSS weights (must sum to 1.0)
pub const HAZARD_WEIGHT: f64 = 0.5;
pub const VULNERABILITY_WEIGHT: f64 = 0.3;
pub const EXPOSURE_WEIGHT: f64 = 0.2;
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

// Resource multipliers
pub const INJURY_FACTOR: f64 = 0.02;
pub const AMBULANCE_DIVISOR: f64 = 10.0;
pub const RESCUE_SCALING: f64 = 5.0;
pub const RELIEF_FACTOR: f64 = 0.1;

// Priority weights
pub const PRIORITY_ADSS_WEIGHT: f64 = 0.4;
pub const PRIORITY_POPULATION_WEIGHT: f64 = 0.3;
pub const PRIORITY_MEDICAL_WEIGHT: f64 = 0.2;
pub const PRIORITY_ACCESSIBILITY_WEIGHT: f64 = 0.1;

/// Minimum zones a caller should supply before running the pipeline.
/// Enforced by callers, not by the stages.
pub const MIN_ZONES: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("severity weights must sum to 1.0 (got {sum:.4})")]
    WeightSum { sum: f64 },

    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// ADSS weights for the hazard, vulnerability and exposure sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeverityWeightsDef")]
pub struct SeverityWeights {
    hazard: f64,
    vulnerability: f64,
    exposure: f64,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SeverityWeightsDef {
    hazard: f64,
    vulnerability: f64,
    exposure: f64,
}

impl Default for SeverityWeightsDef {
    fn default() -> Self {
        Self {
            hazard: HAZARD_WEIGHT,
            vulnerability: VULNERABILITY_WEIGHT,
            exposure: EXPOSURE_WEIGHT,
        }
    }
}

impl TryFrom<SeverityWeightsDef> for SeverityWeights {
    type Error = ConfigError;

    fn try_from(def: SeverityWeightsDef) -> Result<Self, Self::Error> {
        SeverityWeights::new(def.hazard, def.vulnerability, def.exposure)
    }
}

impl SeverityWeights {
    /// Weights must sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(hazard: f64, vulnerability: f64, exposure: f64) -> Result<Self, ConfigError> {
        let sum = hazard + vulnerability + exposure;
        if !((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE) {
            return Err(ConfigError::WeightSum { sum });
        }
        Ok(Self {
            hazard,
            vulnerability,
            exposure,
        })
    }

    pub fn hazard(&self) -> f64 {
        self.hazard
    }

    pub fn vulnerability(&self) -> f64 {
        self.vulnerability
    }

    pub fn exposure(&self) -> f64 {
        self.exposure
    }
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            hazard: HAZARD_WEIGHT,
            vulnerability: VULNERABILITY_WEIGHT,
            exposure: EXPOSURE_WEIGHT,
        }
    }
}

/// Multipliers turning severity and population into resource needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DemandFactorsDef")]
pub struct DemandFactors {
    injury_factor: f64,
    ambulance_divisor: f64,
    rescue_scaling: f64,
    relief_factor: f64,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DemandFactorsDef {
    injury_factor: f64,
    ambulance_divisor: f64,
    rescue_scaling: f64,
    relief_factor: f64,
}

impl Default for DemandFactorsDef {
    fn default() -> Self {
        Self {
            injury_factor: INJURY_FACTOR,
            ambulance_divisor: AMBULANCE_DIVISOR,
            rescue_scaling: RESCUE_SCALING,
            relief_factor: RELIEF_FACTOR,
        }
    }
}

impl TryFrom<DemandFactorsDef> for DemandFactors {
    type Error = ConfigError;

    fn try_from(def: DemandFactorsDef) -> Result<Self, Self::Error> {
        DemandFactors::new(
            def.injury_factor,
            def.ambulance_divisor,
            def.rescue_scaling,
            def.relief_factor,
        )
    }
}

impl DemandFactors {
    /// The ambulance divisor must be positive.
    pub fn new(
        injury_factor: f64,
        ambulance_divisor: f64,
        rescue_scaling: f64,
        relief_factor: f64,
    ) -> Result<Self, ConfigError> {
        if !(ambulance_divisor > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "ambulance_divisor",
                value: ambulance_divisor,
            });
        }
        Ok(Self {
            injury_factor,
            ambulance_divisor,
            rescue_scaling,
            relief_factor,
        })
    }

    pub fn injury_factor(&self) -> f64 {
        self.injury_factor
    }

    pub fn ambulance_divisor(&self) -> f64 {
        self.ambulance_divisor
    }

    pub fn rescue_scaling(&self) -> f64 {
        self.rescue_scaling
    }

    pub fn relief_factor(&self) -> f64 {
        self.relief_factor
    }
}

impl Default for DemandFactors {
    fn default() -> Self {
        Self {
            injury_factor: INJURY_FACTOR,
            ambulance_divisor: AMBULANCE_DIVISOR,
            rescue_scaling: RESCUE_SCALING,
            relief_factor: RELIEF_FACTOR,
        }
    }
}

/// Priority weights. They need not sum to 1; the score is re-normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriorityWeights {
    pub adss: f64,
    pub population: f64,
    pub medical: f64,
    pub accessibility: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            adss: PRIORITY_ADSS_WEIGHT,
            population: PRIORITY_POPULATION_WEIGHT,
            medical: PRIORITY_MEDICAL_WEIGHT,
            accessibility: PRIORITY_ACCESSIBILITY_WEIGHT,
        }
    }
}

/// Complete, validated pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AidraConfig {
    pub severity: SeverityWeights,
    pub demand: DemandFactors,
    pub priority: PriorityWeights,
}

impl AidraConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        let d = SeverityWeights::default();
        assert!(SeverityWeights::new(d.hazard(), d.vulnerability(), d.exposure()).is_ok());
    }

    #[test]
    fn test_weight_sum_tolerance() {
        assert!(SeverityWeights::new(0.5, 0.3, 0.205).is_ok());
        let err = SeverityWeights::new(0.5, 0.3, 0.3).unwrap_err();
        assert!(matches!(err, ConfigError::WeightSum { sum } if (sum - 1.1).abs() < 1e-9));
        assert!(SeverityWeights::new(f64::NAN, 0.3, 0.2).is_err());
    }

    #[test]
    fn test_non_positive_divisor() {
        let err = DemandFactors::new(0.02, 0.0, 5.0, 0.1).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { name: "ambulance_divisor", .. }));
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = AidraConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AidraConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = AidraConfig::from_json_str(
            r#"{"severity": {"hazard": 0.4, "vulnerability": 0.4}, "priority": {"adss": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(config.severity.hazard(), 0.4);
        assert_eq!(config.severity.exposure(), EXPOSURE_WEIGHT);
        assert_eq!(config.priority.adss, 1.0);
        assert_eq!(config.priority.medical, PRIORITY_MEDICAL_WEIGHT);
        assert_eq!(config.demand, DemandFactors::default());
    }

    #[test]
    fn test_invalid_weights_rejected_on_load() {
        let result = AidraConfig::from_json_str(r#"{"severity": {"hazard": 0.9}}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("must sum to 1.0"), "{err}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(AidraConfig::from_json_str(r#"{"severty": {}}"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aidra.json");
        std::fs::write(&path, r#"{"demand": {"rescue_scaling": 8}}"#).unwrap();
        let config = AidraConfig::from_path(&path).unwrap();
        assert_eq!(config.demand.rescue_scaling(), 8.0);

        let missing = AidraConfig::from_path(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
