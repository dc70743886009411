//! History series tests, including the 2024 road discipline split.

use irstats::aggregate::history::{cpi_history, rating_history};
use irstats::model::CategoryType;

use crate::common::{reference_data, utc, SessionBuilder, DAYTONA_OVAL, OKAYAMA};

#[test]
fn test_single_discipline_series_is_chronological() {
    let refdata = reference_data();
    // Deliberately out of order
    let sessions = vec![
        SessionBuilder::new()
            .start(2022, 3, 1)
            .category(CategoryType::Oval)
            .track(DAYTONA_OVAL)
            .irating(1600, 1700)
            .build(),
        SessionBuilder::new()
            .start(2022, 1, 1)
            .category(CategoryType::Oval)
            .track(DAYTONA_OVAL)
            .irating(1500, 1600)
            .build(),
    ];

    let series = rating_history(&sessions, &refdata, CategoryType::Oval).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "Oval");
    let points = &series[0].points;
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].time, utc(2022, 1, 1));
    assert_eq!(points[0].value, 1600.0);
    assert_eq!(points[1].value, 1700.0);
}

#[test]
fn test_rookie_sessions_are_excluded() {
    let refdata = reference_data();
    let sessions = vec![
        SessionBuilder::new().start(2022, 1, 1).build(),
        SessionBuilder::new().start(2022, 2, 1).rookie().build(),
    ];

    let series = rating_history(&sessions, &refdata, CategoryType::Road).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].points.len(), 1);
}

#[test]
fn test_road_split_produces_bridged_series() {
    let refdata = reference_data();
    let sessions = vec![
        // Two road races before the split (in the track-category window)
        SessionBuilder::new()
            .start(2022, 1, 1)
            .track(OKAYAMA)
            .irating(1500, 1600)
            .build(),
        SessionBuilder::new()
            .start(2023, 1, 1)
            .track(OKAYAMA)
            .irating(1600, 1700)
            .build(),
        // After the split, one sports car and one formula car race
        SessionBuilder::new()
            .start(2024, 6, 1)
            .track(OKAYAMA)
            .category(CategoryType::SportsCar)
            .irating(1700, 1800)
            .build(),
        SessionBuilder::new()
            .start(2024, 7, 1)
            .track(OKAYAMA)
            .category(CategoryType::FormulaCar)
            .irating(1700, 1750)
            .build(),
    ];

    let series = rating_history(&sessions, &refdata, CategoryType::Road).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[0].label, "Road");
    assert_eq!(series[1].label, "Sports Car");
    assert_eq!(series[2].label, "Formula Car");

    let last_road = *series[0].points.last().unwrap();
    assert_eq!(last_road.value, 1700.0);

    // Both successor series start at the last road sample
    assert_eq!(series[1].points[0], last_road);
    assert_eq!(series[1].points[1].value, 1800.0);
    assert_eq!(series[2].points[0], last_road);
    assert_eq!(series[2].points[1].value, 1750.0);
}

#[test]
fn test_road_split_drops_empty_successors() {
    let refdata = reference_data();
    let sessions = vec![
        SessionBuilder::new().start(2022, 1, 1).track(OKAYAMA).build(),
        SessionBuilder::new()
            .start(2024, 6, 1)
            .track(OKAYAMA)
            .category(CategoryType::SportsCar)
            .build(),
    ];

    let series = rating_history(&sessions, &refdata, CategoryType::Road).unwrap();
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Road", "Sports Car"]);
}

#[test]
fn test_no_matching_races_yields_no_series() {
    let refdata = reference_data();
    let sessions = vec![SessionBuilder::new().start(2022, 1, 1).build()];
    let series = rating_history(&sessions, &refdata, CategoryType::DirtOval).unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_cpi_history_charts_new_cpi() {
    let refdata = reference_data();
    let sessions = vec![SessionBuilder::new()
        .start(2022, 1, 1)
        .new_cpi(42.5)
        .build()];
    let series = cpi_history(&sessions, &refdata, CategoryType::Road).unwrap();
    assert_eq!(series[0].points[0].value, 42.5);
}
