//! Synthetic zone generation for development and testing without a live feed.

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{table::ZoneTable, zone::ZoneRecord, TableError};

/// Default number of synthetic zones.
pub const DEFAULT_ZONE_COUNT: usize = 20;

/// Default seed for reproducible synthetic scenarios.
pub const DEFAULT_SEED: u64 = 42;

/// Generate `n_zones` synthetic zone records named `Zone_01`, `Zone_02`, ...
///
/// With `Some(seed)` the output is reproducible; `None` seeds from entropy.
pub fn generate_records(n_zones: usize, seed: Option<u64>) -> Vec<ZoneRecord> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let records: Vec<ZoneRecord> = (0..n_zones)
        .map(|i| ZoneRecord {
            zone: format!("Zone_{:02}", i + 1),
            rainfall: rng.gen_range(10.0..300.0),
            river_level: rng.gen_range(1.0..12.0),
            soil_saturation: rng.gen_range(0.2..1.0),
            forecast_rainfall: rng.gen_range(10.0..250.0),
            population_density: rng.gen_range(500.0..6000.0),
            elderly_percentage: rng.gen_range(5.0..30.0),
            poverty_index: rng.gen_range(0.05..0.9),
            drainage_score: rng.gen_range(0.1..1.0),
            hospital_capacity: rng.gen_range(30.0..600.0),
            critical_facilities: rng.gen_range(1u32..25) as f64,
            road_access: rng.gen_range(0.2..1.0),
        })
        .collect();

    info!("Generated synthetic data for {} zones", records.len());
    records
}

/// Generate a synthetic zone table holding every raw column.
pub fn generate_zones(n_zones: usize, seed: Option<u64>) -> Result<ZoneTable, TableError> {
    ZoneTable::from_records(&generate_records(n_zones, seed))
}
