// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};

use club_map_domain::{MapRow, MapTable};
use club_map_persistence::{NewChampionship, NewClub, NewGroup, NewTraining, Persistence};

use crate::{ApiError, MapDataSource};

pub const CSV_HEADER: &str = "Club,training_lat_coord,training_lon_coord,Jour d'entraînement,Début d'entraînement,Fin d'entraînement,Groupe,Commentaires,marker_size,created,updated,deleted,season,phase";

pub fn create_test_row(club: &str, lat: f64, lon: f64, group: &str, size: Option<i32>) -> MapRow {
    MapRow {
        club: Some(club.to_string()),
        latitude: Some(lat),
        longitude: Some(lon),
        training_day: Some(String::from("Tuesday")),
        training_start: Some(String::from("19:00")),
        training_end: Some(String::from("21:00")),
        group: Some(group.to_string()),
        comment: Some(format!("{club} comment")),
        marker_size: size,
        created: None,
        updated: None,
        deleted: None,
    }
}

fn add_club(
    persistence: &Persistence,
    name: &str,
    lat: f64,
    lon: f64,
    championship_id: i32,
    group: &str,
) {
    let club_id = persistence
        .insert_club(&NewClub {
            club_name: Some(name.to_string()),
            latitude: Some(lat),
            longitude: Some(lon),
            commentaires: Some(format!("{name} comment")),
            marker_size: Some(5),
            ..NewClub::default()
        })
        .unwrap();
    persistence
        .insert_training(&NewTraining {
            club_id: Some(club_id),
            jour_entrainement: Some(String::from("Tuesday")),
            debut_entrainement: Some(String::from("19:00")),
            fin_entrainement: Some(String::from("21:00")),
            ..NewTraining::default()
        })
        .unwrap();
    persistence
        .insert_group(&NewGroup {
            club_id: Some(club_id),
            championnat_id: Some(championship_id),
            groupe: Some(group.to_string()),
            ..NewGroup::default()
        })
        .unwrap();
}

fn add_championship(persistence: &Persistence, season: &str, phase: &str) -> i32 {
    persistence
        .insert_championship(&NewChampionship {
            season: Some(season.to_string()),
            phase: Some(phase.to_string()),
            ..NewChampionship::default()
        })
        .unwrap()
}

/// Season 2023 with phases "A" then "B"; season 2024 with phase "P1".
///
/// 2023/A holds clubs X and Y, 2023/B holds club Z, 2024/P1 holds club W.
pub fn create_seeded_persistence() -> Persistence {
    let persistence = Persistence::new_in_memory().unwrap();

    let a = add_championship(&persistence, "2023", "A");
    let b = add_championship(&persistence, "2023", "B");
    let p1 = add_championship(&persistence, "2024", "P1");

    add_club(&persistence, "X", 48.1, -1.6, a, "Poule A");
    add_club(&persistence, "Y", 48.3, -1.8, a, "Poule B");
    add_club(&persistence, "Z", 47.2, -1.5, b, "Poule A");
    add_club(&persistence, "W", 47.9, -2.0, p1, "Poule C");

    persistence
}

/// A source that always fails and counts the row queries it receives.
#[derive(Default)]
pub struct FailingSource {
    pub map_row_calls: AtomicUsize,
}

impl MapDataSource for FailingSource {
    fn seasons(&self) -> Result<Vec<String>, ApiError> {
        Err(failure())
    }

    fn phases(&self, _season: Option<&str>) -> Result<Vec<String>, ApiError> {
        Err(failure())
    }

    fn map_rows(&self, _season: Option<&str>, _phase: Option<&str>) -> Result<MapTable, ApiError> {
        self.map_row_calls.fetch_add(1, Ordering::SeqCst);
        Err(failure())
    }
}

fn failure() -> ApiError {
    ApiError::DataSource {
        message: String::from("store unavailable"),
    }
}
