//! Command implementations for AIDRA CLI.
//!
//! Provides subcommands for ranking zones and allocating resources, for
//! generating synthetic zone tables, and for escalation scenarios.

use clap::{Args, Subcommand};

pub mod generate;
pub mod run;
pub mod simulate;
pub mod source;

/// Where the zone table comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Input zone CSV (header row with a Zone column)
    #[arg(short = 'i', long, required_unless_present = "synthetic")]
    pub input: Option<String>,

    /// Use a generated zone table instead of an input file
    #[arg(long, conflicts_with = "input")]
    pub synthetic: bool,

    /// Number of synthetic zones
    #[arg(long, default_value_t = aidra_zone::synthetic::DEFAULT_ZONE_COUNT)]
    pub zones: usize,

    /// Seed for synthetic zones
    #[arg(long, default_value_t = aidra_zone::synthetic::DEFAULT_SEED)]
    pub seed: u64,
}

/// Resource pools and weights for one pipeline run.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Available ambulances
    #[arg(long, default_value_t = aidra_data::allocation::DEFAULT_AMBULANCES)]
    pub ambulances: u64,

    /// Available rescue teams
    #[arg(long, default_value_t = aidra_data::allocation::DEFAULT_RESCUE_TEAMS)]
    pub rescue_teams: u64,

    /// JSON file overriding the default weights and factors
    #[arg(short = 'c', long)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score, rank and allocate resources across zones
    Run {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        plan: PlanArgs,

        /// Output path for the annotated zone CSV (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Print the allocation summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a synthetic zone table
    Generate {
        /// Number of zones
        #[arg(long, default_value_t = aidra_zone::synthetic::DEFAULT_ZONE_COUNT)]
        zones: usize,

        /// Random seed
        #[arg(long, default_value_t = aidra_zone::synthetic::DEFAULT_SEED)]
        seed: u64,

        /// Output path for the zone CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Escalate hazard inputs hour by hour and check resource adequacy
    Simulate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        plan: PlanArgs,

        /// Hours to simulate
        #[arg(long, default_value_t = aidra_data::simulation::DEFAULT_HOURS)]
        hours: u32,

        /// Hourly escalation factor (1.05 = 5% per hour)
        #[arg(long, default_value_t = aidra_data::simulation::DEFAULT_ESCALATION_FACTOR)]
        factor: f64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Run {
            source,
            plan,
            output,
            json,
        } => run::run_plan(&source, &plan, output.as_deref(), json),
        Command::Generate {
            zones,
            seed,
            output,
        } => generate::run_generate(zones, seed, &output),
        Command::Simulate {
            source,
            plan,
            hours,
            factor,
            json,
        } => simulate::run_simulate(&source, &plan, hours, factor, json),
    }
}
