//! Row shaping for the session list report.

use chrono::{DateTime, Utc};

use crate::filters::{is_main_event, is_race};
use crate::model::{CategoryType, LookupError, ReferenceData, Session};

/// One row of the session list: a main-event race result with its
/// reference labels resolved.
#[derive(Clone, Debug)]
pub struct SessionRow {
    pub subsession_id: i64,
    pub start_time: DateTime<Utc>,
    pub series_name: String,
    pub car_name: String,
    pub track_name: String,
    /// 1-based position as shown to users (the API is 0-based).
    pub finish_position_in_class: i32,
    pub irating_delta: i32,
    pub new_irating: i32,
    pub license_category: CategoryType,
}

/// Shape race results into display rows, newest first.
pub fn session_rows(
    sessions: &[Session],
    refdata: &ReferenceData,
) -> Result<Vec<SessionRow>, LookupError> {
    let mut rows = Vec::new();
    for session in sessions {
        if !is_race(session) || !is_main_event(session) {
            continue;
        }
        rows.push(SessionRow {
            subsession_id: session.subsession_id,
            start_time: session.start_time,
            series_name: session.series_name.clone(),
            car_name: refdata.car(session.car_id)?.car_name.clone(),
            track_name: refdata.track(session.track_id)?.track_name.clone(),
            finish_position_in_class: session.finish_position_in_class + 1,
            irating_delta: session.irating_delta(),
            new_irating: session.new_irating,
            license_category: session.license_category,
        });
    }
    rows.sort_by(|lhs, rhs| rhs.start_time.cmp(&lhs.start_time));
    Ok(rows)
}
