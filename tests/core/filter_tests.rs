//! Session predicate tests, including the date-corrected category rule.

use irstats::filters::{
    corrected_category, is_main_event, is_official, is_race, is_rated_race_in_category,
    is_rookie, matches_category,
};
use irstats::model::{CategoryType, LookupError};

use crate::common::{reference_data, SessionBuilder, DAYTONA_OVAL, OKAYAMA};

#[test]
fn test_race_predicate_uses_simsession_type() {
    let race = SessionBuilder::new().build();
    assert!(is_race(&race));

    let practice = SessionBuilder::new().practice().build();
    assert!(!is_race(&practice));
}

#[test]
fn test_main_event_is_segment_zero() {
    assert!(is_main_event(&SessionBuilder::new().build()));
    assert!(!is_main_event(
        &SessionBuilder::new().attached_segment(1).build()
    ));
}

#[test]
fn test_rookie_sentinel() {
    assert!(!is_rookie(&SessionBuilder::new().build()));
    assert!(is_rookie(&SessionBuilder::new().rookie().build()));
}

#[test]
fn test_official_flag() {
    assert!(is_official(&SessionBuilder::new().build()));
    assert!(!is_official(&SessionBuilder::new().unofficial().build()));
}

#[test]
fn test_category_before_2020_trusts_session_field() {
    let refdata = reference_data();
    // Road license on the oval track; old data trusts the session field
    let session = SessionBuilder::new()
        .start(2020, 1, 1)
        .category(CategoryType::Road)
        .track(DAYTONA_OVAL)
        .build();
    assert_eq!(
        corrected_category(&session, &refdata),
        Ok(CategoryType::Road)
    );
}

#[test]
fn test_category_in_window_uses_track() {
    let refdata = reference_data();
    // Oval license at a road track; in the unreliable window the track wins
    let session = SessionBuilder::new()
        .start(2022, 1, 1)
        .category(CategoryType::Oval)
        .track(OKAYAMA)
        .build();
    assert_eq!(
        corrected_category(&session, &refdata),
        Ok(CategoryType::Road)
    );
}

#[test]
fn test_category_after_split_trusts_session_field_again() {
    let refdata = reference_data();
    let session = SessionBuilder::new()
        .start(2024, 6, 1)
        .category(CategoryType::SportsCar)
        .track(OKAYAMA)
        .build();
    assert_eq!(
        corrected_category(&session, &refdata),
        Ok(CategoryType::SportsCar)
    );
}

#[test]
fn test_category_cutoff_boundaries() {
    let refdata = reference_data();
    // The day before the first cutoff still trusts the session field
    let before = SessionBuilder::new()
        .start(2020, 12, 7)
        .category(CategoryType::Oval)
        .track(OKAYAMA)
        .build();
    assert_eq!(corrected_category(&before, &refdata), Ok(CategoryType::Oval));

    // On the cutoff day the track category takes over
    let on = SessionBuilder::new()
        .start(2020, 12, 8)
        .category(CategoryType::Oval)
        .track(OKAYAMA)
        .build();
    assert_eq!(corrected_category(&on, &refdata), Ok(CategoryType::Road));
}

#[test]
fn test_window_lookup_misses_are_errors() {
    let refdata = reference_data();
    let session = SessionBuilder::new()
        .start(2022, 1, 1)
        .track((999, 9999))
        .build();
    assert_eq!(
        corrected_category(&session, &refdata),
        Err(LookupError::UnknownTrack(999))
    );
}

#[test]
fn test_matches_category() {
    let refdata = reference_data();
    let session = SessionBuilder::new().start(2022, 1, 1).track(OKAYAMA).build();
    assert_eq!(
        matches_category(&session, &refdata, CategoryType::Road),
        Ok(true)
    );
    assert_eq!(
        matches_category(&session, &refdata, CategoryType::Oval),
        Ok(false)
    );
}

#[test]
fn test_rated_race_filter_excludes_rookies_practice_and_attached() {
    let refdata = reference_data();
    let check = |session| {
        is_rated_race_in_category(&session, &refdata, CategoryType::Road).unwrap()
    };

    assert!(check(SessionBuilder::new().start(2022, 1, 1).build()));
    assert!(!check(SessionBuilder::new().start(2022, 1, 1).rookie().build()));
    assert!(!check(SessionBuilder::new().start(2022, 1, 1).practice().build()));
    assert!(!check(
        SessionBuilder::new()
            .start(2022, 1, 1)
            .attached_segment(1)
            .build()
    ));
}
