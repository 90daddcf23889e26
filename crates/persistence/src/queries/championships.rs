// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::championnats;
use crate::error::PersistenceError;

/// Keeps the first occurrence of each non-empty value, in input order.
fn first_appearances(values: Vec<Option<String>>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    values
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty() && seen.insert(value.clone()))
        .collect()
}

/// Lists the distinct championship seasons.
///
/// Seasons are returned in the order their first championship was stored.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_seasons(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    let seasons: Vec<Option<String>> = championnats::table
        .order(championnats::id.asc())
        .select(championnats::season)
        .load(conn)?;

    Ok(first_appearances(seasons))
}

/// Lists the distinct phases of championships in `season`.
///
/// Phases are returned in the order their first championship was stored, so
/// the first element is the default phase for the season.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season` - The season, matched exactly
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_phases(
    conn: &mut SqliteConnection,
    season: &str,
) -> Result<Vec<String>, PersistenceError> {
    let phases: Vec<Option<String>> = championnats::table
        .filter(championnats::season.eq(season))
        .order(championnats::id.asc())
        .select(championnats::phase)
        .load(conn)?;

    Ok(first_appearances(phases))
}
