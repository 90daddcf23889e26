// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test also exercises connection establishment,
//! migrations, and foreign key enforcement through `new_in_memory()`.

use crate::tests::{create_test_club, seed_single_club};
use crate::{NewGroup, NewTraining, Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_enabled() {
    let persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let db1 = Persistence::new_in_memory().unwrap();
    let db2 = Persistence::new_in_memory().unwrap();

    seed_single_club(&db1);

    assert_eq!(db1.list_seasons().unwrap().len(), 1);
    assert!(db2.list_seasons().unwrap().is_empty(), "db2 should be isolated");
}

#[test]
fn test_clones_share_the_pool() {
    let persistence = Persistence::new_in_memory().unwrap();
    let clone = persistence.clone();

    seed_single_club(&persistence);

    assert_eq!(clone.list_seasons().unwrap(), vec![String::from("2023")]);
}

#[test]
fn test_training_with_unknown_club_is_rejected() {
    let persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.insert_training(&NewTraining {
        club_id: Some(999),
        ..NewTraining::default()
    });

    assert!(result.is_err(), "Foreign keys must be enforced");
}

#[test]
fn test_group_with_unknown_championship_is_rejected() {
    let persistence = Persistence::new_in_memory().unwrap();
    let club_id = create_test_club(&persistence, "X", 48.1, -1.6);

    let result = persistence.insert_group(&NewGroup {
        club_id: Some(club_id),
        championnat_id: Some(42),
        ..NewGroup::default()
    });

    assert!(result.is_err(), "Foreign keys must be enforced");
}

#[test]
fn test_file_database_persists_between_opens() {
    let path = std::env::temp_dir().join(format!(
        "club_map_init_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let persistence = Persistence::new_with_file(&path).unwrap();
        seed_single_club(&persistence);
    }

    let reopened = Persistence::new_with_file(&path).unwrap();
    assert_eq!(
        reopened.fetch_map_rows(Some("2023"), Some("P1")).unwrap().len(),
        1
    );

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
