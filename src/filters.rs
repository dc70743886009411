//! Session predicates used by every report.
//!
//! All predicates are pure functions over a [`Session`] and compose with
//! plain `&&` in filter pipelines. The only stateful input is the
//! reference data needed for the date-corrected category rule.

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{CategoryType, LookupError, ReferenceData, Session, SimsessionType};

/// Sentinel iRating marking a rookie (unrated) session.
pub const ROOKIE_IRATING: i32 = -1;

/// Before this date the per-session `license_category` field is trusted.
/// Between this and [`category_split_cutoff`] the field was unreliable and
/// the track's category is used instead.
pub fn category_field_cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 12, 8, 0, 0, 0).unwrap()
}

/// The road discipline was split into sports-car and formula-car on this
/// date; from here on the per-session field is trusted again.
pub fn category_split_cutoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap()
}

/// Rookie sessions carry no rating and are excluded from rating history.
pub fn is_rookie(session: &Session) -> bool {
    session.new_irating == ROOKIE_IRATING
}

/// Canonical race predicate.
///
/// Older data also encoded races as `event_type == 5`; the backend
/// backfills `simsession_type` for those rows, so this is the single
/// field consulted here.
pub fn is_race(session: &Session) -> bool {
    session.simsession_type == SimsessionType::Race
}

/// The main competitive segment, as opposed to attached practice and
/// qualify sub-segments.
pub fn is_main_event(session: &Session) -> bool {
    session.simsession_number == 0
}

pub fn is_official(session: &Session) -> bool {
    session.official_session
}

/// Effective discipline of a session, applying the historical category
/// rule change:
///
/// * before 2020-12-08: the session's own `license_category`;
/// * 2020-12-08 to 2024-03-05: the track's category (the session field
///   was unreliable in that window);
/// * from 2024-03-05: the session's own field again (road was re-split
///   into sports-car and formula-car).
pub fn corrected_category(
    session: &Session,
    refdata: &ReferenceData,
) -> Result<CategoryType, LookupError> {
    if session.start_time < category_field_cutoff() {
        Ok(session.license_category)
    } else if session.start_time < category_split_cutoff() {
        Ok(refdata.track(session.track_id)?.category)
    } else {
        Ok(session.license_category)
    }
}

/// Exact match against the date-corrected category.
pub fn matches_category(
    session: &Session,
    refdata: &ReferenceData,
    category: CategoryType,
) -> Result<bool, LookupError> {
    Ok(corrected_category(session, refdata)? == category)
}

/// The standard filter for rating/CPI history series: rated race results
/// from the main event in the requested discipline.
pub fn is_rated_race_in_category(
    session: &Session,
    refdata: &ReferenceData,
    category: CategoryType,
) -> Result<bool, LookupError> {
    Ok(!is_rookie(session)
        && is_race(session)
        && is_main_event(session)
        && matches_category(session, refdata, category)?)
}
