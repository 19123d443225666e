use serde::{Deserialize, Serialize};

/// Raw observations for one geographic zone, as delivered by an acquisition
/// source.
///
/// Field names serialize to the CSV headers used throughout the pipeline
/// (see [`crate::columns`]). All inputs are reals, including the
/// critical-facility count, so every raw column has a single numeric kind.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ZoneRecord {
    #[serde(rename = "Zone")]
    pub zone: String,

    /// Observed rainfall (mm)
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    /// River level (m)
    #[serde(rename = "River_Level")]
    pub river_level: f64,
    /// Soil saturation (0-1)
    #[serde(rename = "Soil_Saturation")]
    pub soil_saturation: f64,
    /// Forecast rainfall (mm)
    #[serde(rename = "Forecast_Rainfall")]
    pub forecast_rainfall: f64,

    /// Persons per km²
    #[serde(rename = "Population_Density")]
    pub population_density: f64,
    #[serde(rename = "Elderly_Percentage")]
    pub elderly_percentage: f64,
    #[serde(rename = "Poverty_Index")]
    pub poverty_index: f64,

    #[serde(rename = "Drainage_Score")]
    pub drainage_score: f64,
    /// Hospital beds
    #[serde(rename = "Hospital_Capacity")]
    pub hospital_capacity: f64,

    #[serde(rename = "Critical_Facilities")]
    pub critical_facilities: f64,
    /// Road access (0-1, higher is better)
    #[serde(rename = "Road_Access")]
    pub road_access: f64,
}

impl ZoneRecord {
    /// Raw values in [`crate::columns::RAW`] order.
    pub fn raw_values(&self) -> [f64; 11] {
        [
            self.rainfall,
            self.river_level,
            self.soil_saturation,
            self.forecast_rainfall,
            self.population_density,
            self.elderly_percentage,
            self.poverty_index,
            self.drainage_score,
            self.hospital_capacity,
            self.critical_facilities,
            self.road_access,
        ]
    }
}
