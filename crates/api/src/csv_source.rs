// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat-file row source.
//!
//! A CSV export of the joined table, one line per map row, with the twelve
//! map columns plus `season` and `phase`. The file is parsed once; queries
//! filter the parsed rows in memory with the same exact-match rules as the
//! database.

use club_map_domain::{COLUMN_LABELS, MapRow, MapTable, normalize_filter};
use csv::StringRecord;
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::error::ApiError;
use crate::source::MapDataSource;

/// Header of the championship season column.
pub const SEASON_COLUMN: &str = "season";

/// Header of the championship phase column.
pub const PHASE_COLUMN: &str = "phase";

/// One parsed CSV line.
#[derive(Debug, Clone, PartialEq)]
struct CsvRecord {
    season: Option<String>,
    phase: Option<String>,
    row: MapRow,
}

/// Map rows loaded from a CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvMapSource {
    records: Vec<CsvRecord>,
}

/// Validates that every required header is present, and maps each to its index.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (header.to_string(), idx))
        .collect();

    let missing: Vec<&str> = COLUMN_LABELS
        .iter()
        .copied()
        .chain([SEASON_COLUMN, PHASE_COLUMN])
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Parses one data line into a record.
fn parse_csv_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    row_number: usize,
) -> Result<CsvRecord, ApiError> {
    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let parse_coordinate = |name: &str| -> Result<Option<f64>, ApiError> {
        let value: Option<f64> = parse_field::<f64>(get_field(name), name, row_number)?;
        match value {
            Some(v) if !v.is_finite() => Err(ApiError::InvalidCsvFormat {
                reason: format!("row {row_number}, column '{name}': non-finite coordinate '{v}'"),
            }),
            _ => Ok(value),
        }
    };

    let row = MapRow {
        club: get_field(COLUMN_LABELS[0]),
        latitude: parse_coordinate(COLUMN_LABELS[1])?,
        longitude: parse_coordinate(COLUMN_LABELS[2])?,
        training_day: get_field(COLUMN_LABELS[3]),
        training_start: get_field(COLUMN_LABELS[4]),
        training_end: get_field(COLUMN_LABELS[5]),
        group: get_field(COLUMN_LABELS[6]),
        comment: get_field(COLUMN_LABELS[7]),
        marker_size: parse_field::<i32>(get_field(COLUMN_LABELS[8]), COLUMN_LABELS[8], row_number)?,
        created: get_field(COLUMN_LABELS[9]),
        updated: get_field(COLUMN_LABELS[10]),
        deleted: get_field(COLUMN_LABELS[11]),
    };

    Ok(CsvRecord {
        season: get_field(SEASON_COLUMN),
        phase: get_field(PHASE_COLUMN),
        row,
    })
}

/// Parses an optional numeric cell, naming the row and column on failure.
fn parse_field<T: FromStr>(
    value: Option<String>,
    column: &str,
    row_number: usize,
) -> Result<Option<T>, ApiError> {
    value
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|_| ApiError::InvalidCsvFormat {
                    reason: format!("row {row_number}, column '{column}': invalid number '{raw}'"),
                })
        })
        .transpose()
}

/// Keeps the first occurrence of each value, in input order.
fn first_appearances<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

impl CsvMapSource {
    /// Loads rows from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a required header is
    /// missing, or a numeric cell does not parse.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ApiError> {
        let path: &Path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| ApiError::CsvUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let source: Self = Self::from_reader(file)?;
        info!(path = %path.display(), rows = source.len(), "Loaded CSV row source");
        Ok(source)
    }

    /// Loads rows from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns an error if a required header is missing, a line has the wrong
    /// number of fields, or a numeric cell does not parse.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ApiError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let headers: StringRecord = reader
            .headers()
            .map_err(|e| ApiError::InvalidCsvFormat {
                reason: format!("Failed to read CSV headers: {e}"),
            })?
            .clone();

        let header_map: HashMap<String, usize> = validate_headers(&headers)?;

        let mut records: Vec<CsvRecord> = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row_number: usize = idx + 1;
            let record: StringRecord = result.map_err(|e| ApiError::InvalidCsvFormat {
                reason: format!("row {row_number}: {e}"),
            })?;
            records.push(parse_csv_row(&record, &header_map, row_number)?);
        }

        Ok(Self { records })
    }

    /// Number of data lines loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MapDataSource for CsvMapSource {
    fn seasons(&self) -> Result<Vec<String>, ApiError> {
        Ok(first_appearances(
            self.records.iter().filter_map(|r| r.season.as_deref()),
        ))
    }

    fn phases(&self, season: Option<&str>) -> Result<Vec<String>, ApiError> {
        let Some(season) = normalize_filter(season) else {
            return Ok(Vec::new());
        };

        Ok(first_appearances(
            self.records
                .iter()
                .filter(|r| r.season.as_deref() == Some(season))
                .filter_map(|r| r.phase.as_deref()),
        ))
    }

    fn map_rows(&self, season: Option<&str>, phase: Option<&str>) -> Result<MapTable, ApiError> {
        let (Some(season), Some(phase)) = (normalize_filter(season), normalize_filter(phase))
        else {
            return Ok(MapTable::empty());
        };

        let rows: Vec<MapRow> = self
            .records
            .iter()
            .filter(|r| r.season.as_deref() == Some(season) && r.phase.as_deref() == Some(phase))
            .map(|r| r.row.clone())
            .collect();

        Ok(MapTable::new(rows))
    }
}
