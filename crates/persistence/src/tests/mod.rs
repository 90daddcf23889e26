// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;

use crate::{NewChampionship, NewClub, NewGroup, NewTraining, Persistence};

pub fn create_test_club(persistence: &Persistence, name: &str, lat: f64, lon: f64) -> i32 {
    persistence
        .insert_club(&NewClub {
            club_name: Some(name.to_string()),
            latitude: Some(lat),
            longitude: Some(lon),
            commentaires: Some(format!("{name} comment")),
            marker_size: Some(5),
            created: Some(String::from("2023-09-01 10:00:00")),
            updated: None,
            deleted: None,
        })
        .unwrap()
}

pub fn create_test_training(persistence: &Persistence, club_id: i32, day: &str) -> i32 {
    persistence
        .insert_training(&NewTraining {
            club_id: Some(club_id),
            jour_entrainement: Some(day.to_string()),
            debut_entrainement: Some(String::from("19:00")),
            fin_entrainement: Some(String::from("21:00")),
            ..NewTraining::default()
        })
        .unwrap()
}

pub fn create_test_championship(persistence: &Persistence, season: &str, phase: &str) -> i32 {
    persistence
        .insert_championship(&NewChampionship {
            season: Some(season.to_string()),
            phase: Some(phase.to_string()),
            ..NewChampionship::default()
        })
        .unwrap()
}

pub fn create_test_group(
    persistence: &Persistence,
    club_id: i32,
    championship_id: i32,
    label: &str,
) -> i32 {
    persistence
        .insert_group(&NewGroup {
            club_id: Some(club_id),
            championnat_id: Some(championship_id),
            groupe: Some(label.to_string()),
            ..NewGroup::default()
        })
        .unwrap()
}

/// Seeds club "X" (48.1, -1.6, size 5) training on Tuesday in group
/// "Poule A" of championship 2023/P1.
pub fn seed_single_club(persistence: &Persistence) -> i32 {
    let club_id = create_test_club(persistence, "X", 48.1, -1.6);
    create_test_training(persistence, club_id, "Tuesday");
    let championship_id = create_test_championship(persistence, "2023", "P1");
    create_test_group(persistence, club_id, championship_id, "Poule A");
    club_id
}
