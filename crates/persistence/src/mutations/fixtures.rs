// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{NewChampionship, NewClub, NewGroup, NewTraining};
use crate::diesel_schema::{championnats, clubs, groupes, trainings};
use crate::error::PersistenceError;

/// Inserts a club and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_club(conn: &mut SqliteConnection, club: &NewClub) -> Result<i32, PersistenceError> {
    let club_id: i32 = diesel::insert_into(clubs::table)
        .values(club)
        .returning(clubs::id)
        .get_result(conn)?;

    debug!(club_id, name = ?club.club_name, "Inserted club");
    Ok(club_id)
}

/// Inserts a training slot and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails, including when `club_id` does not
/// reference an existing club.
pub fn insert_training(
    conn: &mut SqliteConnection,
    training: &NewTraining,
) -> Result<i32, PersistenceError> {
    let training_id: i32 = diesel::insert_into(trainings::table)
        .values(training)
        .returning(trainings::id)
        .get_result(conn)?;

    debug!(training_id, club_id = ?training.club_id, "Inserted training");
    Ok(training_id)
}

/// Inserts a championship and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_championship(
    conn: &mut SqliteConnection,
    championship: &NewChampionship,
) -> Result<i32, PersistenceError> {
    let championship_id: i32 = diesel::insert_into(championnats::table)
        .values(championship)
        .returning(championnats::id)
        .get_result(conn)?;

    debug!(
        championship_id,
        season = ?championship.season,
        phase = ?championship.phase,
        "Inserted championship"
    );
    Ok(championship_id)
}

/// Inserts a group association and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails, including when either foreign key
/// does not reference an existing row.
pub fn insert_group(conn: &mut SqliteConnection, group: &NewGroup) -> Result<i32, PersistenceError> {
    let group_id: i32 = diesel::insert_into(groupes::table)
        .values(group)
        .returning(groupes::id)
        .get_result(conn)?;

    debug!(group_id, club_id = ?group.club_id, championship_id = ?group.championnat_id, "Inserted group");
    Ok(group_id)
}
