// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row sources feeding the map.

use club_map_domain::MapTable;
use club_map_persistence::Persistence;

use crate::error::ApiError;

/// Anything that can answer the dropdown options and the filtered rows.
///
/// Implementations must match seasons and phases exactly, return options in
/// first-appearance order, and treat a missing or empty filter as matching
/// nothing without failing.
pub trait MapDataSource: Send + Sync {
    /// Lists the distinct seasons.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn seasons(&self) -> Result<Vec<String>, ApiError>;

    /// Lists the distinct phases of `season`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn phases(&self, season: Option<&str>) -> Result<Vec<String>, ApiError>;

    /// Returns the map rows for `season` and `phase`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn map_rows(&self, season: Option<&str>, phase: Option<&str>) -> Result<MapTable, ApiError>;
}

impl MapDataSource for Persistence {
    fn seasons(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.list_seasons()?)
    }

    fn phases(&self, season: Option<&str>) -> Result<Vec<String>, ApiError> {
        Ok(self.list_phases(season)?)
    }

    fn map_rows(&self, season: Option<&str>, phase: Option<&str>) -> Result<MapTable, ApiError> {
        Ok(self.fetch_map_rows(season, phase)?)
    }
}
