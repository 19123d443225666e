use std::collections::HashSet;

use crate::{columns, error::TableError, zone::ZoneRecord};

/// A single named column of a [`ZoneTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Scores, ratios and raw observations.
    Real(Vec<f64>),
    /// Resource counts written by the demand and allocation stages.
    Count(Vec<u64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Real(v) => v.len(),
            Column::Count(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values of either kind as reals.
    pub fn to_reals(&self) -> Vec<f64> {
        match self {
            Column::Real(v) => v.clone(),
            Column::Count(v) => v.iter().map(|&c| c as f64).collect(),
        }
    }

    fn permuted(&self, order: &[usize]) -> Column {
        match self {
            Column::Real(v) => Column::Real(order.iter().map(|&i| v[i]).collect()),
            Column::Count(v) => Column::Count(order.iter().map(|&i| v[i]).collect()),
        }
    }

    /// CSV cell text: reals at fixed precision, counts as integers.
    pub(crate) fn format_cell(&self, row: usize) -> String {
        match self {
            Column::Real(v) => format!("{:.6}", v[row]),
            Column::Count(v) => v[row].to_string(),
        }
    }
}

/// Column-oriented table of zones.
///
/// Rows are keyed by a unique zone id and keep a fixed order until a caller
/// explicitly permutes them. Columns keep insertion order, so derived
/// columns always follow the raw inputs they were computed from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneTable {
    zone_ids: Vec<String>,
    columns: Vec<(String, Column)>,
}

impl ZoneTable {
    /// Create a table with the given zones and no columns.
    pub fn new(zone_ids: Vec<String>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(zone_ids.len());
        for id in &zone_ids {
            if !seen.insert(id.as_str()) {
                return Err(TableError::DuplicateZone(id.clone()));
            }
        }
        Ok(Self {
            zone_ids,
            columns: Vec::new(),
        })
    }

    /// Build a table holding every raw column of the given records.
    pub fn from_records(records: &[ZoneRecord]) -> Result<Self, TableError> {
        let ids = records.iter().map(|r| r.zone.clone()).collect();
        let mut table = Self::new(ids)?;
        for (idx, name) in columns::RAW.iter().enumerate() {
            let values = records.iter().map(|r| r.raw_values()[idx]).collect();
            table.set_real(*name, values)?;
        }
        Ok(table)
    }

    pub fn zone_ids(&self) -> &[String] {
        &self.zone_ids
    }

    pub fn len(&self) -> usize {
        self.zone_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zone_ids.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Column values as reals, whatever the column kind.
    pub fn values(&self, name: &str) -> Option<Vec<f64>> {
        self.column(name).map(Column::to_reals)
    }

    /// Column values if the column holds counts.
    pub fn counts(&self, name: &str) -> Option<&[u64]> {
        match self.column(name)? {
            Column::Count(v) => Some(v),
            Column::Real(_) => None,
        }
    }

    /// Names from `required` that the table lacks, in request order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.has_column(name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Replace the named column, or append it if absent.
    pub fn set_column(&mut self, name: impl Into<String>, column: Column) -> Result<(), TableError> {
        let name = name.into();
        if column.len() != self.len() {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.len(),
                actual: column.len(),
            });
        }
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name, column)),
        }
        Ok(())
    }

    pub fn set_real(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<(), TableError> {
        self.set_column(name, Column::Real(values))
    }

    pub fn set_counts(&mut self, name: impl Into<String>, values: Vec<u64>) -> Result<(), TableError> {
        self.set_column(name, Column::Count(values))
    }

    /// Apply `f` to every value of the named column in place. Count columns
    /// become real columns. Returns false if the column is absent.
    pub fn map_values(&mut self, name: &str, f: impl Fn(f64) -> f64) -> bool {
        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, column)) => {
                let mapped = column.to_reals().into_iter().map(f).collect();
                *column = Column::Real(mapped);
                true
            }
            None => false,
        }
    }

    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.columns.iter().position(|(n, _)| n == name)?;
        Some(self.columns.remove(idx).1)
    }

    /// A copy with rows reordered so that row `k` of the result is row
    /// `order[k]` of `self`.
    ///
    /// `order` must be a permutation of `0..self.len()`.
    pub fn permuted(&self, order: &[usize]) -> ZoneTable {
        debug_assert_eq!(order.len(), self.len());
        ZoneTable {
            zone_ids: order.iter().map(|&i| self.zone_ids[i].clone()).collect(),
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.permuted(order)))
                .collect(),
        }
    }
}
