// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Number of columns in a map table.
pub const COLUMN_COUNT: usize = 12;

/// Column labels of the map table, in output order.
///
/// These labels are shown verbatim in map hover text, so they must not be
/// translated, reordered, or ASCII-folded.
pub const COLUMN_LABELS: [&str; COLUMN_COUNT] = [
    "Club",
    "training_lat_coord",
    "training_lon_coord",
    "Jour d'entraînement",
    "Début d'entraînement",
    "Fin d'entraînement",
    "Groupe",
    "Commentaires",
    "marker_size",
    "created",
    "updated",
    "deleted",
];

/// Label of the club name column.
pub const CLUB_LABEL: &str = COLUMN_LABELS[0];
/// Label of the training day column.
pub const TRAINING_DAY_LABEL: &str = COLUMN_LABELS[3];
/// Label of the training start column.
pub const TRAINING_START_LABEL: &str = COLUMN_LABELS[4];
/// Label of the group column.
pub const GROUP_LABEL: &str = COLUMN_LABELS[6];
/// Label of the comment column.
pub const COMMENT_LABEL: &str = COLUMN_LABELS[7];

/// One plotted row: a club training slot under one group of a championship.
///
/// A club with several trainings and several matching groups produces one
/// row per (training, group) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRow {
    #[serde(rename = "Club")]
    pub club: Option<String>,
    #[serde(rename = "training_lat_coord")]
    pub latitude: Option<f64>,
    #[serde(rename = "training_lon_coord")]
    pub longitude: Option<f64>,
    #[serde(rename = "Jour d'entraînement")]
    pub training_day: Option<String>,
    #[serde(rename = "Début d'entraînement")]
    pub training_start: Option<String>,
    #[serde(rename = "Fin d'entraînement")]
    pub training_end: Option<String>,
    #[serde(rename = "Groupe")]
    pub group: Option<String>,
    #[serde(rename = "Commentaires")]
    pub comment: Option<String>,
    pub marker_size: Option<i32>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub deleted: Option<String>,
}

impl MapRow {
    /// Returns `(latitude, longitude)` when both are known and finite.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

/// The plotting-friendly result of a season/phase filter.
///
/// The column set is fixed; an empty table still carries every label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTable {
    columns: [&'static str; COLUMN_COUNT],
    rows: Vec<MapRow>,
}

impl MapTable {
    /// Creates a table from already shaped rows.
    #[must_use]
    pub const fn new(rows: Vec<MapRow>) -> Self {
        Self {
            columns: COLUMN_LABELS,
            rows,
        }
    }

    /// Creates a table with the fixed columns and no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub const fn columns(&self) -> &[&'static str; COLUMN_COUNT] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[MapRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<MapRow> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for MapTable {
    fn default() -> Self {
        Self::empty()
    }
}
