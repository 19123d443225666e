use std::fmt;

use aidra_zone::{TableError, ZoneTable};
use log::error;
use thiserror::Error;

/// Pipeline stage, as reported in errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Severity,
    Demand,
    Priority,
    Allocation,
    Escalation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Stage::Severity => "severity",
            Stage::Demand => "demand",
            Stage::Priority => "priority",
            Stage::Allocation => "allocation",
            Stage::Escalation => "escalation",
        };
        f.write_str(token)
    }
}

/// Per-call pipeline failure. A stage that fails returns no table.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} stage: missing required columns {missing:?}")]
    MissingColumns { stage: Stage, missing: Vec<String> },

    /// A derived column did not fit the table. Well-formed tables never hit
    /// this.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Fail with `MissingColumns` unless every `required` column is present.
pub(crate) fn require(table: &ZoneTable, stage: Stage, required: &[&str]) -> Result<(), PipelineError> {
    let missing = table.missing_columns(required);
    if missing.is_empty() {
        return Ok(());
    }
    error!("Missing columns for {}: {:?}", stage, missing);
    Err(PipelineError::MissingColumns { stage, missing })
}

/// Read a column as reals, failing with `MissingColumns` if it is absent.
pub(crate) fn column(table: &ZoneTable, stage: Stage, name: &str) -> Result<Vec<f64>, PipelineError> {
    table.values(name).ok_or_else(|| PipelineError::MissingColumns {
        stage,
        missing: vec![name.to_string()],
    })
}
