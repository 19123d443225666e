use thiserror::Error;

/// Errors raised while building, reading or writing a zone table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zone table has no `{0}` column")]
    MissingZoneColumn(&'static str),

    #[error("duplicate zone id: {0}")]
    DuplicateZone(String),

    #[error("column `{column}` has {actual} values, table has {expected} zones")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("zone `{zone}`: column `{column}` has non-numeric value `{value}`")]
    InvalidValue {
        zone: String,
        column: String,
        value: String,
    },
}
