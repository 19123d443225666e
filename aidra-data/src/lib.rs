//! Severity scoring, demand estimation, priority ranking and resource
//! allocation for zone tables.
//!
//! Stages run in a strict order, each reading the raw columns plus the
//! columns written by its predecessor:
//!
//! ```text
//! raw zones -> severity (ADSS) -> demand -> priority (sorted) -> allocation
//! ```
//!
//! Every stage takes `&ZoneTable` and returns a new table, so a run holds no
//! state and separate runs never interact. [`pipeline::run_pipeline`] chains
//! them.

pub mod allocation;
pub mod config;
pub mod demand;
pub mod error;
pub mod normalization;
pub mod pipeline;
pub mod priority;
pub mod severity;
pub mod simulation;
pub mod summary;

pub use allocation::{allocate_pool, allocate_resources, ResourcePools};
pub use config::{AidraConfig, ConfigError, DemandFactors, PriorityWeights, SeverityWeights};
pub use demand::estimate_demand;
pub use error::{PipelineError, Stage};
pub use normalization::min_max_normalize;
pub use pipeline::run_pipeline;
pub use priority::compute_priority;
pub use severity::compute_adss;
pub use simulation::{
    evaluate_resource_adequacy, scenario_statistics, simulate_escalation, ResourceAdequacy,
    ScenarioStatistics,
};
pub use summary::{summarize_allocation, AllocationSummary, ResourceSummary};
