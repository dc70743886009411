//! Driver summary and session table tests.

use irstats::aggregate::stats::{collect_driver_stats, corners_per_incident};
use irstats::aggregate::table::session_rows;
use irstats::units;

use crate::common::{reference_data, SessionBuilder, OKAYAMA};

#[test]
fn test_driver_stats_sum_over_sessions() {
    let refdata = reference_data();
    let sessions = vec![
        SessionBuilder::new()
            .track(OKAYAMA)
            .laps(10)
            .average_lap(units::from_minutes(1.0))
            .incidents(2)
            .build(),
        SessionBuilder::new()
            .track(OKAYAMA)
            .laps(5)
            .average_lap(units::from_minutes(2.0))
            .incidents(1)
            .build(),
    ];

    let stats = collect_driver_stats(&sessions, &refdata).unwrap();
    assert_eq!(stats.laps, 15);
    assert_eq!(stats.time, units::from_minutes(20.0));
    assert!((stats.distance - 3.7 * 15.0).abs() < 1e-9);
    // 13 corners per lap at Okayama
    assert_eq!(stats.corners, 13 * 15);
    assert_eq!(stats.incidents, 3);
    assert_eq!(stats.cpi(), (13.0 * 15.0) / 3.0);
}

#[test]
fn test_corners_per_incident() {
    assert_eq!(corners_per_incident(10, 12, 4), 30.0);
    assert_eq!(corners_per_incident(10, 12, 0), f64::INFINITY);
    assert_eq!(units::format_cpi(corners_per_incident(10, 12, 0)), "∞");
}

#[test]
fn test_clean_career_has_infinite_cpi() {
    let refdata = reference_data();
    let sessions = vec![SessionBuilder::new().incidents(0).build()];
    let stats = collect_driver_stats(&sessions, &refdata).unwrap();
    assert!(stats.cpi().is_infinite());
}

#[test]
fn test_session_rows_keep_only_main_event_races() {
    let refdata = reference_data();
    let sessions = vec![
        SessionBuilder::new().subsession_id(1).start(2023, 1, 1).build(),
        SessionBuilder::new()
            .subsession_id(2)
            .start(2023, 2, 1)
            .practice()
            .build(),
        SessionBuilder::new()
            .subsession_id(3)
            .start(2023, 3, 1)
            .attached_segment(1)
            .build(),
        SessionBuilder::new().subsession_id(4).start(2023, 4, 1).build(),
    ];

    let rows = session_rows(&sessions, &refdata).unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.subsession_id).collect();
    // Newest first, practice and attached segments dropped
    assert_eq!(ids, vec![4, 1]);
}

#[test]
fn test_session_rows_resolve_labels_and_position() {
    let refdata = reference_data();
    let sessions = vec![SessionBuilder::new().irating(1500, 1450).build()];

    let rows = session_rows(&sessions, &refdata).unwrap();
    assert_eq!(rows[0].car_name, "Mazda MX-5 Cup");
    assert_eq!(rows[0].track_name, "Okayama Short");
    // API position is zero-based; display is one-based
    assert_eq!(rows[0].finish_position_in_class, 4);
    assert_eq!(rows[0].irating_delta, -50);
}
