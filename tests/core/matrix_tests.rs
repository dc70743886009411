//! Car x track usage matrix tests.

use irstats::aggregate::matrix::build_usage_matrix;
use irstats::model::LookupError;
use irstats::units;

use crate::common::{
    reference_data, SessionBuilder, DAYTONA_OVAL, LIME_ROCK, MX5, OKAYAMA, SKIP_BARBER,
};

#[test]
fn test_axes_sort_by_descending_total_time() {
    let refdata = reference_data();
    let hour = units::from_hours(1.0);
    // Skip Barber: 3h at Lime Rock. MX-5: 1h at Okayama.
    let sessions = vec![
        SessionBuilder::new()
            .car(MX5)
            .track(OKAYAMA)
            .laps(1)
            .average_lap(hour)
            .build(),
        SessionBuilder::new()
            .car(SKIP_BARBER)
            .track(LIME_ROCK)
            .laps(3)
            .average_lap(hour)
            .build(),
    ];

    let usage = build_usage_matrix(&sessions, &refdata).unwrap();
    assert_eq!(
        usage.x_labels,
        vec!["Skip Barber RT2000".to_string(), "Mazda MX-5 Cup".to_string()]
    );
    assert_eq!(
        usage.y_labels,
        vec!["Lime Rock Park".to_string(), "Okayama Short".to_string()]
    );

    // Cells follow the sorted axes
    assert_eq!(usage.matrix[0][0], Some(3.0 * hour as f64));
    assert_eq!(usage.matrix[1][1], Some(hour as f64));
    // Combinations that never occurred stay empty
    assert_eq!(usage.matrix[0][1], None);
    assert_eq!(usage.matrix[1][0], None);
}

#[test]
fn test_repeat_combinations_accumulate() {
    let refdata = reference_data();
    let hour = units::from_hours(1.0);
    let sessions = vec![
        SessionBuilder::new().laps(1).average_lap(hour).build(),
        SessionBuilder::new().laps(2).average_lap(hour).build(),
    ];

    let usage = build_usage_matrix(&sessions, &refdata).unwrap();
    assert_eq!(usage.matrix.len(), 1);
    assert_eq!(usage.matrix[0][0], Some(3.0 * hour as f64));
}

#[test]
fn test_tracks_key_by_package_id() {
    let refdata = reference_data();
    // Same car at two different track packages gives two rows
    let sessions = vec![
        SessionBuilder::new().track(OKAYAMA).build(),
        SessionBuilder::new().track(DAYTONA_OVAL).build(),
    ];
    let usage = build_usage_matrix(&sessions, &refdata).unwrap();
    assert_eq!(usage.x_labels.len(), 1);
    assert_eq!(usage.y_labels.len(), 2);
}

#[test]
fn test_unknown_car_is_an_error() {
    let refdata = reference_data();
    let sessions = vec![SessionBuilder::new().car(999).build()];
    assert_eq!(
        build_usage_matrix(&sessions, &refdata).unwrap_err(),
        LookupError::UnknownCar(999)
    );
}

#[test]
fn test_empty_sessions_give_empty_matrix() {
    let refdata = reference_data();
    let usage = build_usage_matrix(&[], &refdata).unwrap();
    assert!(usage.matrix.is_empty());
    assert!(usage.x_labels.is_empty());
    assert!(usage.y_labels.is_empty());
}
