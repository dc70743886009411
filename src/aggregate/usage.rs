//! Per-car and per-track usage totals for the ranking bar charts.

use std::collections::HashMap;

use crate::model::{LookupError, ReferenceData, Session};

/// Accumulated totals for one car or one track configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct UsageEntry {
    pub label: String,
    /// Total session time, in ten-thousandths of a second.
    pub time: i64,
    /// Total distance in kilometers.
    pub distance: f64,
}

fn collect_usage<K, L>(
    sessions: &[Session],
    refdata: &ReferenceData,
    key_of: K,
    label_of: L,
) -> Result<Vec<UsageEntry>, LookupError>
where
    K: Fn(&Session) -> i32,
    L: Fn(&Session) -> Result<String, LookupError>,
{
    let mut entries: Vec<UsageEntry> = Vec::new();
    let mut indices: HashMap<i32, usize> = HashMap::new();

    for session in sessions {
        let key = key_of(session);
        let index = match indices.get(&key) {
            Some(&index) => index,
            None => {
                indices.insert(key, entries.len());
                entries.push(UsageEntry {
                    label: label_of(session)?,
                    time: 0,
                    distance: 0.0,
                });
                entries.len() - 1
            }
        };

        let track = refdata.track(session.track_id)?;
        entries[index].time += session.time_in_session();
        entries[index].distance += track.track_config_length * session.laps_complete as f64;
    }

    // Ranking convention: most-used first
    entries.sort_by(|lhs, rhs| rhs.time.cmp(&lhs.time));
    Ok(entries)
}

/// Time and distance per car, most-used first.
pub fn collect_car_usage(
    sessions: &[Session],
    refdata: &ReferenceData,
) -> Result<Vec<UsageEntry>, LookupError> {
    collect_usage(
        sessions,
        refdata,
        |s| s.car_id,
        |s| Ok(refdata.car(s.car_id)?.car_name.clone()),
    )
}

/// Time and distance per track configuration (keyed by `package_id`),
/// most-used first.
pub fn collect_track_usage(
    sessions: &[Session],
    refdata: &ReferenceData,
) -> Result<Vec<UsageEntry>, LookupError> {
    collect_usage(
        sessions,
        refdata,
        |s| s.package_id,
        |s| Ok(refdata.track(s.track_id)?.track_name.clone()),
    )
}
