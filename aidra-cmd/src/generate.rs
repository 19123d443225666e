//! The `generate` subcommand.

use aidra_zone::synthetic::generate_zones;
use log::info;

/// Write `zones` synthetic zones generated from `seed` to `output`.
pub fn run_generate(zones: usize, seed: u64, output: &str) -> anyhow::Result<()> {
    let table = generate_zones(zones, Some(seed))?;
    table.to_csv_path(output)?;
    info!("Generate complete. Output: {}", output);
    Ok(())
}
