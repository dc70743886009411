//! Whole-career summary numbers for the driver summary report.

use crate::model::{LookupError, ReferenceData, Session};

/// Totals across every fetched session of a driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriverStats {
    pub laps: i64,
    /// Total time on track, in ten-thousandths of a second.
    pub time: i64,
    /// Total distance in kilometers.
    pub distance: f64,
    pub corners: i64,
    pub incidents: i64,
}

impl DriverStats {
    /// Career corners per incident.
    pub fn cpi(&self) -> f64 {
        if self.incidents == 0 {
            f64::INFINITY
        } else {
            self.corners as f64 / self.incidents as f64
        }
    }
}

/// Corners per incident: `laps * corners_per_lap / incidents`.
///
/// Zero incidents means an infinite CPI; the caller formats that as "∞"
/// (see `units::format_cpi`) instead of feeding infinity into a scale.
pub fn corners_per_incident(laps: i32, corners_per_lap: i32, incidents: i32) -> f64 {
    if incidents == 0 {
        f64::INFINITY
    } else {
        (laps as f64 * corners_per_lap as f64) / incidents as f64
    }
}

/// Sum laps, time, distance, corners and incidents over all sessions.
pub fn collect_driver_stats(
    sessions: &[Session],
    refdata: &ReferenceData,
) -> Result<DriverStats, LookupError> {
    let mut stats = DriverStats::default();
    for session in sessions {
        let track = refdata.track(session.track_id)?;
        stats.laps += session.laps_complete as i64;
        stats.time += session.time_in_session();
        stats.distance += track.track_config_length * session.laps_complete as f64;
        stats.corners += session.laps_complete as i64 * track.corners_per_lap as i64;
        stats.incidents += session.incidents as i64;
    }
    Ok(stats)
}
