// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_map_domain::MapRow;
use diesel::prelude::*;

use crate::diesel_schema::{championnats, clubs, groupes, trainings};

/// A club to insert.
#[derive(Debug, Clone, Default, PartialEq, Insertable)]
#[diesel(table_name = clubs)]
pub struct NewClub {
    pub club_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub commentaires: Option<String>,
    pub marker_size: Option<i32>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub deleted: Option<String>,
}

/// A training slot to insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable)]
#[diesel(table_name = trainings)]
pub struct NewTraining {
    pub club_id: Option<i32>,
    pub jour_entrainement: Option<String>,
    pub debut_entrainement: Option<String>,
    pub fin_entrainement: Option<String>,
    pub commentaires: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub deleted: Option<String>,
}

/// A championship (season + phase) to insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable)]
#[diesel(table_name = championnats)]
pub struct NewChampionship {
    pub season: Option<String>,
    pub phase: Option<String>,
    pub commentaires: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub deleted: Option<String>,
}

/// A club-to-championship group association to insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable)]
#[diesel(table_name = groupes)]
pub struct NewGroup {
    pub club_id: Option<i32>,
    pub championnat_id: Option<i32>,
    pub groupe: Option<String>,
    pub commentaires: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub deleted: Option<String>,
}

/// Raw row of the club/training/group/championship join.
///
/// Field order matches the select clause in `queries::map_rows`.
#[derive(Debug, Clone, Queryable)]
pub struct MapRowRecord {
    pub club_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub jour_entrainement: Option<String>,
    pub debut_entrainement: Option<String>,
    pub fin_entrainement: Option<String>,
    pub groupe: Option<String>,
    pub commentaires: Option<String>,
    pub marker_size: Option<i32>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub deleted: Option<String>,
}

impl From<MapRowRecord> for MapRow {
    fn from(record: MapRowRecord) -> Self {
        Self {
            club: record.club_name,
            latitude: record.latitude,
            longitude: record.longitude,
            training_day: record.jour_entrainement,
            training_start: record.debut_entrainement,
            training_end: record.fin_entrainement,
            group: record.groupe,
            comment: record.commentaires,
            marker_size: record.marker_size,
            created: record.created,
            updated: record.updated,
            deleted: record.deleted,
        }
    }
}
