//! AIDRA CLI - rank flood-affected zones and allocate emergency resources.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aidra-cli",
    version,
    about = "Disaster severity scoring and emergency resource allocation"
)]
struct Cli {
    #[command(subcommand)]
    command: aidra_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    aidra_cmd::run(cli.command)
}
