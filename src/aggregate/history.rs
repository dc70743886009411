//! Rating and CPI history series.
//!
//! A history is built from rated main-event race results in one
//! discipline, ordered by start time. Requesting the road discipline is
//! special: the 2024 split replaced road with sports-car and formula-car,
//! so the result decomposes into up to three parallel series, and the
//! last road point is prepended to each non-empty successor so the lines
//! connect across the split without a gap.

use crate::filters::is_rated_race_in_category;
use crate::model::{CategoryType, LookupError, ReferenceData, Session};
use crate::plot::line::DataPoint;

/// One labeled series of a history chart.
#[derive(Clone, Debug)]
pub struct HistorySeries {
    pub label: String,
    pub points: Vec<DataPoint>,
}

fn series_for_category(
    sessions: &[&Session],
    refdata: &ReferenceData,
    category: CategoryType,
    value_of: &dyn Fn(&Session) -> f64,
) -> Result<Vec<DataPoint>, LookupError> {
    let mut points = Vec::new();
    for session in sessions {
        if is_rated_race_in_category(session, refdata, category)? {
            points.push(DataPoint::new(session.start_time, value_of(session)));
        }
    }
    Ok(points)
}

/// Build the history series for one discipline.
///
/// `value_of` extracts the charted metric from a session (new iRating,
/// new CPI, ...). Empty series are dropped; an entirely empty result
/// means the driver has no rated races in that discipline.
pub fn history_series(
    sessions: &[Session],
    refdata: &ReferenceData,
    category: CategoryType,
    value_of: impl Fn(&Session) -> f64,
) -> Result<Vec<HistorySeries>, LookupError> {
    // Chart order is chronological regardless of fetch order
    let mut ordered: Vec<&Session> = sessions.iter().collect();
    ordered.sort_by_key(|s| s.start_time);

    let mut result = Vec::new();

    if category == CategoryType::Road {
        let road = series_for_category(&ordered, refdata, CategoryType::Road, &value_of)?;
        let sports =
            series_for_category(&ordered, refdata, CategoryType::SportsCar, &value_of)?;
        let formula =
            series_for_category(&ordered, refdata, CategoryType::FormulaCar, &value_of)?;

        let bridge = road.last().copied();

        if !road.is_empty() {
            result.push(HistorySeries {
                label: CategoryType::Road.nice_name().to_string(),
                points: road,
            });
        }
        for (category, mut points) in [
            (CategoryType::SportsCar, sports),
            (CategoryType::FormulaCar, formula),
        ] {
            if points.is_empty() {
                continue;
            }
            // Connect the successor line back to the last road sample
            if let Some(bridge) = bridge {
                points.insert(0, bridge);
            }
            result.push(HistorySeries {
                label: category.nice_name().to_string(),
                points,
            });
        }
    } else {
        let points = series_for_category(&ordered, refdata, category, &value_of)?;
        if !points.is_empty() {
            result.push(HistorySeries {
                label: category.nice_name().to_string(),
                points,
            });
        }
    }

    Ok(result)
}

/// iRating progression for one discipline.
pub fn rating_history(
    sessions: &[Session],
    refdata: &ReferenceData,
    category: CategoryType,
) -> Result<Vec<HistorySeries>, LookupError> {
    history_series(sessions, refdata, category, |s| s.new_irating as f64)
}

/// Corners-per-incident progression for one discipline.
pub fn cpi_history(
    sessions: &[Session],
    refdata: &ReferenceData,
    category: CategoryType,
) -> Result<Vec<HistorySeries>, LookupError> {
    history_series(sessions, refdata, category, |s| s.new_cpi as f64)
}
