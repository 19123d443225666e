//! Core zone types for AIDRA.
//!
//! A [`ZoneTable`](table::ZoneTable) is the unit every pipeline stage
//! consumes and produces: an ordered set of uniquely keyed zones plus named
//! numeric columns. Raw columns come from an acquisition source (CSV or the
//! synthetic generator); derived columns are appended by the stages in
//! `aidra-data`.

pub mod columns;
pub mod error;
pub mod io;
pub mod synthetic;
pub mod table;
pub mod zone;

pub use error::TableError;
pub use table::{Column, ZoneTable};
pub use zone::ZoneRecord;
