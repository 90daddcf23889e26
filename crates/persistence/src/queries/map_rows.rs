// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_map_domain::MapRow;
use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::MapRowRecord;
use crate::diesel_schema::{championnats, clubs, groupes, trainings};
use crate::error::PersistenceError;

/// Loads every (club, training, group) row for one championship.
///
/// Clubs are inner-joined to their groups, the groups' championships, and
/// the clubs' trainings, then restricted to championships whose season and
/// phase equal the arguments exactly. Nothing is deduplicated: a club with
/// K trainings and M matching groups yields K×M rows.
///
/// Soft-deleted rows are not excluded.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `season` - The championship season, matched exactly
/// * `phase` - The championship phase, matched exactly
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn fetch_map_rows(
    conn: &mut SqliteConnection,
    season: &str,
    phase: &str,
) -> Result<Vec<MapRow>, PersistenceError> {
    let records: Vec<MapRowRecord> = clubs::table
        .inner_join(groupes::table.on(groupes::club_id.eq(clubs::id.nullable())))
        .inner_join(
            championnats::table.on(groupes::championnat_id.eq(championnats::id.nullable())),
        )
        .inner_join(trainings::table.on(trainings::club_id.eq(clubs::id.nullable())))
        .filter(championnats::season.eq(season))
        .filter(championnats::phase.eq(phase))
        .order((clubs::id.asc(), trainings::id.asc(), groupes::id.asc()))
        .select((
            clubs::club_name,
            clubs::latitude,
            clubs::longitude,
            trainings::jour_entrainement,
            trainings::debut_entrainement,
            trainings::fin_entrainement,
            groupes::groupe,
            clubs::commentaires,
            clubs::marker_size,
            clubs::created,
            clubs::updated,
            clubs::deleted,
        ))
        .load(conn)?;

    debug!(season, phase, rows = records.len(), "Loaded map rows");

    Ok(records.into_iter().map(MapRow::from).collect())
}
