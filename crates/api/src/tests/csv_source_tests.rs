// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{CSV_HEADER, create_seeded_persistence};
use crate::{ApiError, CsvMapSource, MapDataSource};

fn load(lines: &[&str]) -> Result<CsvMapSource, ApiError> {
    let mut content = String::from(CSV_HEADER);
    for line in lines {
        content.push('\n');
        content.push_str(line);
    }
    CsvMapSource::from_reader(content.as_bytes())
}

fn seeded() -> CsvMapSource {
    load(&[
        "X,48.1,-1.6,Tuesday,19:00,21:00,Poule A,X comment,5,,,,2023,A",
        "Y,48.3,-1.8,Monday,18:30,20:00,Poule B,,3,,,,2023,A",
        "Z,47.2,-1.5,Friday,20:00,22:00,Poule A,,,,,,2023,B",
        "W,47.9,-2.0,Sunday,10:00,12:00,Poule C,,4,,,,2024,P1",
    ])
    .unwrap()
}

#[test]
fn test_loads_all_rows() {
    let source = seeded();
    assert_eq!(source.len(), 4);
    assert!(!source.is_empty());
}

#[test]
fn test_seasons_and_phases_in_first_appearance_order() {
    let source = seeded();

    assert_eq!(source.seasons().unwrap(), vec!["2023", "2024"]);
    assert_eq!(source.phases(Some("2023")).unwrap(), vec!["A", "B"]);
    assert!(source.phases(Some("")).unwrap().is_empty());
    assert!(source.phases(None).unwrap().is_empty());
}

#[test]
fn test_map_rows_filter_exactly() {
    let source = seeded();

    let table = source.map_rows(Some("2023"), Some("A")).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].club.as_deref(), Some("X"));
    assert_eq!(table.rows()[0].marker_size, Some(5));
    assert_eq!(table.rows()[1].comment, None);

    assert!(source.map_rows(Some("2023"), Some("a")).unwrap().is_empty());
    assert!(source.map_rows(Some("2023"), None).unwrap().is_empty());
}

#[test]
fn test_empty_cells_are_absent() {
    let source = seeded();

    let table = source.map_rows(Some("2023"), Some("B")).unwrap();
    assert_eq!(table.rows()[0].marker_size, None);
    assert_eq!(table.rows()[0].deleted, None);
}

#[test]
fn test_columns_may_appear_in_any_order() {
    let content = "phase,season,Club,training_lat_coord,training_lon_coord,Jour d'entraînement,Début d'entraînement,Fin d'entraînement,Groupe,Commentaires,marker_size,created,updated,deleted,extra\n\
                   A,2023,X,48.1,-1.6,Tuesday,19:00,21:00,Poule A,,5,,,,ignored";
    let source = CsvMapSource::from_reader(content.as_bytes()).unwrap();

    let table = source.map_rows(Some("2023"), Some("A")).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].coordinates(), Some((48.1, -1.6)));
}

#[test]
fn test_missing_header_is_rejected() {
    let content = "Club,season,phase\nX,2023,A";
    let result = CsvMapSource::from_reader(content.as_bytes());

    match result {
        Err(ApiError::InvalidCsvFormat { reason }) => {
            assert!(reason.contains("training_lat_coord"));
            assert!(reason.contains("marker_size"));
        }
        other => panic!("Expected InvalidCsvFormat, got {other:?}"),
    }
}

#[test]
fn test_bad_number_names_row_and_column() {
    let result = load(&[
        "X,48.1,-1.6,Tuesday,19:00,21:00,Poule A,,5,,,,2023,A",
        "Y,north,-1.8,Monday,18:30,20:00,Poule B,,3,,,,2023,A",
    ]);

    match result {
        Err(ApiError::InvalidCsvFormat { reason }) => {
            assert!(reason.contains("row 2"));
            assert!(reason.contains("training_lat_coord"));
        }
        other => panic!("Expected InvalidCsvFormat, got {other:?}"),
    }
}

#[test]
fn test_fractional_marker_size_is_rejected() {
    let result = load(&["X,48.1,-1.6,Tuesday,19:00,21:00,Poule A,,2.5,,,,2023,A"]);
    assert!(matches!(result, Err(ApiError::InvalidCsvFormat { .. })));
}

#[test]
fn test_wrong_field_count_is_rejected() {
    let result = load(&["X,48.1,-1.6"]);
    assert!(matches!(result, Err(ApiError::InvalidCsvFormat { .. })));
}

#[test]
fn test_missing_file_is_unreadable() {
    let result = CsvMapSource::from_path("/nonexistent/club_map_rows.csv");
    assert!(matches!(result, Err(ApiError::CsvUnreadable { .. })));
}

#[test]
fn test_csv_source_matches_store_for_same_data() {
    let store = create_seeded_persistence();
    let csv = load(&[
        "X,48.1,-1.6,Tuesday,19:00,21:00,Poule A,X comment,5,,,,2023,A",
        "Y,48.3,-1.8,Tuesday,19:00,21:00,Poule B,Y comment,5,,,,2023,A",
        "Z,47.2,-1.5,Tuesday,19:00,21:00,Poule A,Z comment,5,,,,2023,B",
        "W,47.9,-2.0,Tuesday,19:00,21:00,Poule C,W comment,5,,,,2024,P1",
    ])
    .unwrap();

    assert_eq!(csv.seasons().unwrap(), store.seasons().unwrap());
    assert_eq!(
        csv.phases(Some("2023")).unwrap(),
        store.phases(Some("2023")).unwrap()
    );
    for (season, phase) in [("2023", "A"), ("2023", "B"), ("2024", "P1"), ("2024", "A")] {
        assert_eq!(
            csv.map_rows(Some(season), Some(phase)).unwrap(),
            store.map_rows(Some(season), Some(phase)).unwrap(),
            "{season}/{phase}"
        );
    }
}

#[test]
fn test_non_finite_coordinates_are_rejected() {
    for line in [
        "X,NaN,-1.6,Tuesday,19:00,21:00,Poule A,,5,,,,2023,A",
        "X,48.1,inf,Tuesday,19:00,21:00,Poule A,,5,,,,2023,A",
        "X,-inf,-1.6,Tuesday,19:00,21:00,Poule A,,5,,,,2023,A",
    ] {
        match load(&[line]) {
            Err(ApiError::InvalidCsvFormat { reason }) => {
                assert!(reason.contains("row 1"), "{reason}");
                assert!(reason.contains("non-finite"), "{reason}");
            }
            other => panic!("Expected InvalidCsvFormat for {line}, got {other:?}"),
        }
    }
}
