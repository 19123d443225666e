//! Loading of zone tables and configuration shared by the subcommands.

use aidra_data::{config::MIN_ZONES, AidraConfig, ResourcePools};
use aidra_zone::{synthetic::generate_zones, ZoneTable};
use anyhow::Context;
use log::info;

use crate::{PlanArgs, SourceArgs};

/// Load the zone table named by `source` and check it has enough zones.
pub fn load_zones(source: &SourceArgs) -> anyhow::Result<ZoneTable> {
    let table = match &source.input {
        Some(path) if !source.synthetic => ZoneTable::from_csv_path(path)
            .with_context(|| format!("Failed to load zones from {}", path))?,
        _ => {
            info!(
                "Using {} synthetic zones (seed {})",
                source.zones, source.seed
            );
            generate_zones(source.zones, Some(source.seed))?
        }
    };

    if table.len() < MIN_ZONES {
        anyhow::bail!(
            "At least {} zones are required, got {}",
            MIN_ZONES,
            table.len()
        );
    }
    Ok(table)
}

/// Load and validate the configuration once, before any pipeline run.
pub fn load_config(plan: &PlanArgs) -> anyhow::Result<AidraConfig> {
    match &plan.config {
        Some(path) => {
            let config = AidraConfig::from_path(path)
                .with_context(|| format!("Invalid configuration {}", path))?;
            info!("Loaded configuration from {}", path);
            Ok(config)
        }
        None => Ok(AidraConfig::default()),
    }
}

pub fn pools(plan: &PlanArgs) -> ResourcePools {
    ResourcePools {
        ambulances: plan.ambulances,
        rescue_teams: plan.rescue_teams,
    }
}
