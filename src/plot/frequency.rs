//! Calendar heatmap scene builder.
//!
//! Buckets arbitrary events by the UTC calendar day they occurred on and
//! lays the buckets out as one 7-row grid per year (day-of-week rows,
//! week columns), covering every day from Jan 1 of the first year to
//! Dec 31 of the last - not just days with data. A single color scale is
//! computed over the maximum single-day aggregate of the whole range so
//! intensity is comparable year-to-year.
//!
//! Days without any event keep `value: None` and get the neutral no-data
//! fill; a day whose events sum to zero is still colored by the scale.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::calendar::{week_count, week_index, weekday_index, year_days, DayKey};
use crate::color::ColorScale;

/// One calendar day cell.
#[derive(Clone, Debug)]
pub struct FrequencyCell {
    pub date: NaiveDate,
    /// Week column within the year (week 0 begins Jan 1).
    pub week: u32,
    /// Row: Monday = 0 ... Sunday = 6.
    pub weekday: u32,
    pub value: Option<f64>,
    /// First day of a month; the renderer draws a separator before it.
    pub month_start: bool,
}

/// All cells of one year, in date order.
#[derive(Clone, Debug)]
pub struct YearGrid {
    pub year: i32,
    /// Number of week columns in this year's grid.
    pub weeks: u32,
    pub cells: Vec<FrequencyCell>,
}

/// Computed calendar heatmap description.
#[derive(Clone, Debug)]
pub struct FrequencyScene {
    pub years: Vec<YearGrid>,
    /// Shared scale from 0 to the largest single-day aggregate.
    pub scale: ColorScale,
    /// Formats a day's aggregate for tooltips and the legend.
    pub format_value: fn(f64) -> String,
}

/// Tooltip line shown for a cell with no recorded activity.
pub const NO_ACTIVITY_TEXT: &str = "No Activity";

impl FrequencyScene {
    pub fn tooltip_text(&self, cell: &FrequencyCell) -> String {
        match cell.value {
            Some(value) => format!("{}: {}", cell.date, (self.format_value)(value)),
            None => format!("{}: {}", cell.date, NO_ACTIVITY_TEXT),
        }
    }

    pub fn legend_min_label(&self) -> String {
        (self.format_value)(self.scale.min())
    }

    pub fn legend_max_label(&self) -> String {
        (self.format_value)(self.scale.max())
    }
}

/// Bucket `data` by UTC day and build the year grids.
///
/// Returns `None` when `data` is empty.
pub fn build_frequency_scene<T>(
    data: &[T],
    date_of: impl Fn(&T) -> DateTime<Utc>,
    value_of: impl Fn(&T) -> f64,
    format_value: fn(f64) -> String,
) -> Option<FrequencyScene> {
    if data.is_empty() {
        return None;
    }

    // Accumulate per-day sums; days never touched stay out of the map.
    let mut buckets: BTreeMap<DayKey, f64> = BTreeMap::new();
    for item in data {
        let key = DayKey::from_datetime(&date_of(item));
        *buckets.entry(key).or_insert(0.0) += value_of(item);
    }

    let first_year = buckets.keys().next()?.date().year();
    let last_year = buckets.keys().next_back()?.date().year();

    let max_value = buckets.values().copied().fold(0.0_f64, f64::max);

    let years = (first_year..=last_year)
        .map(|year| YearGrid {
            year,
            weeks: week_count(year),
            cells: year_days(year)
                .map(|date| FrequencyCell {
                    date,
                    week: week_index(date),
                    weekday: weekday_index(date),
                    value: buckets.get(&DayKey::from_date(date)).copied(),
                    month_start: date.day() == 1,
                })
                .collect(),
        })
        .collect();

    Some(FrequencyScene {
        years,
        scale: ColorScale::heat(0.0, max_value),
        format_value,
    })
}
