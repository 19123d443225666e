//! CSV reading and writing for zone tables.
//!
//! The input format has a header row with a `Zone` column plus any number of
//! numeric columns:
//!
//! ```text
//! Zone,Rainfall,River_Level,...,Road_Access
//! Zone_01,120.5,4.2,...,0.8
//! ```
//!
//! Every non-`Zone` column is read as a real column, and `inf` or `NaN` cells
//! are rejected. Schema completeness is not checked here; each pipeline stage
//! checks the columns it needs.

use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, WriterBuilder};
use log::info;

use crate::{
    columns,
    error::TableError,
    table::{Column, ZoneTable},
};

impl ZoneTable {
    /// Parse a zone table from CSV text.
    pub fn from_csv_str(csv_object: &str) -> Result<ZoneTable, TableError> {
        Self::from_csv_reader(csv_object.as_bytes())
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<ZoneTable, TableError> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_csv_reader(file)?;
        info!(
            "Loaded {} zones with {} columns from {}",
            table.len(),
            table.column_names().count(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<ZoneTable, TableError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let zone_idx = headers
            .iter()
            .position(|h| h == columns::ZONE)
            .ok_or(TableError::MissingZoneColumn(columns::ZONE))?;

        let value_headers: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != zone_idx)
            .map(|(idx, h)| (idx, h.to_string()))
            .collect();

        let mut zone_ids = Vec::new();
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); value_headers.len()];
        for row in rdr.records() {
            let record = row?;
            let zone = record.get(zone_idx).unwrap_or_default().to_string();
            for (slot, (idx, name)) in value_headers.iter().enumerate() {
                let cell = record.get(*idx).unwrap_or_default();
                let value = cell
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| TableError::InvalidValue {
                        zone: zone.clone(),
                        column: name.clone(),
                        value: cell.to_string(),
                    })?;
                values[slot].push(value);
            }
            zone_ids.push(zone);
        }

        let mut table = ZoneTable::new(zone_ids)?;
        for ((_, name), column) in value_headers.into_iter().zip(values) {
            table.set_real(name, column)?;
        }
        Ok(table)
    }

    pub fn to_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        let file = File::create(path.as_ref())?;
        self.to_csv_writer(file)?;
        info!("Wrote {} zones to {}", self.len(), path.as_ref().display());
        Ok(())
    }

    /// Write the table as CSV: `Zone` first, then columns in table order.
    pub fn to_csv_writer<W: io::Write>(&self, writer: W) -> Result<(), TableError> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

        let mut header = vec![columns::ZONE.to_string()];
        header.extend(self.column_names().map(str::to_string));
        wtr.write_record(&header)?;

        let cols: Vec<&Column> = self
            .column_names()
            .filter_map(|name| self.column(name))
            .collect();
        for (row, zone) in self.zone_ids().iter().enumerate() {
            let mut record = Vec::with_capacity(cols.len() + 1);
            record.push(zone.clone());
            record.extend(cols.iter().map(|c| c.format_cell(row)));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::TableError, table::ZoneTable};

    const ZONES_CSV: &str = "\
Zone,Rainfall,Road_Access
Zone_01,120.5,0.8
Zone_02, 40 ,0.25
";

    #[test]
    fn test_from_csv_str() {
        let table = ZoneTable::from_csv_str(ZONES_CSV).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.zone_ids()[1], "Zone_02");
        assert_eq!(table.values("Rainfall"), Some(vec![120.5, 40.0]));
        assert_eq!(table.values("Road_Access"), Some(vec![0.8, 0.25]));
    }

    #[test]
    fn test_missing_zone_column() {
        let err = ZoneTable::from_csv_str("Rainfall\n1.0\n").unwrap_err();
        assert!(matches!(err, TableError::MissingZoneColumn("Zone")));
    }

    #[test]
    fn test_non_numeric_cell() {
        let err = ZoneTable::from_csv_str("Zone,Rainfall\nZ1,heavy\n").unwrap_err();
        match err {
            TableError::InvalidValue { zone, column, value } => {
                assert_eq!(zone, "Z1");
                assert_eq!(column, "Rainfall");
                assert_eq!(value, "heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_cells_rejected() {
        for cell in ["inf", "-inf", "NaN", "infinity"] {
            let csv = format!("Zone,Rainfall\nZ1,1\nZ2,{cell}\n");
            match ZoneTable::from_csv_str(&csv) {
                Err(TableError::InvalidValue { zone, value, .. }) => {
                    assert_eq!(zone, "Z2");
                    assert_eq!(value, cell);
                }
                other => panic!("expected InvalidValue for {cell}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_duplicate_zone_in_csv() {
        let err = ZoneTable::from_csv_str("Zone,Rainfall\nZ1,1\nZ1,2\n").unwrap_err();
        assert!(matches!(err, TableError::DuplicateZone(_)));
    }

    #[test]
    fn test_write_counts_as_integers() {
        let mut table = ZoneTable::from_csv_str(ZONES_CSV).unwrap();
        table.set_counts("Ambulance_Needed", vec![3, 0]).unwrap();
        let mut out = Vec::new();
        table.to_csv_writer(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Zone,Rainfall,Road_Access,Ambulance_Needed"));
        assert_eq!(lines.next(), Some("Zone_01,120.500000,0.800000,3"));
        assert_eq!(lines.next(), Some("Zone_02,40.000000,0.250000,0"));
    }

    #[test]
    fn test_path_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.csv");
        let table = ZoneTable::from_csv_str(ZONES_CSV).unwrap();
        table.to_csv_path(&path).unwrap();
        let reloaded = ZoneTable::from_csv_path(&path).unwrap();
        assert_eq!(reloaded, table);
    }
}
