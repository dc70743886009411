//! UTC calendar-day bucketing for the activity frequency map.
//!
//! Sessions are bucketed by the UTC calendar day they started on. The day
//! key is ordinal (days since the common era), so it is injective over
//! (year, month, day) for any year range and sorts chronologically.
//!
//! For calendar-grid layout the day-of-week is remapped so Monday = 0 and
//! Sunday = 6, and week 0 of a year begins at Jan 1 (a new column starts
//! at each Monday). The remap affects layout only, never the bucket key.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Stable, sortable identifier of a UTC calendar day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(i32);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.num_days_from_ce())
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self::from_date(dt.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0)
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Day-of-week remapped for grid layout: Monday = 0 ... Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Week column within the year. Week 0 begins at Jan 1; subsequent weeks
/// begin at each Monday.
pub fn week_index(date: NaiveDate) -> u32 {
    // Jan 1 of any representable year exists
    let jan1 = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    (date.ordinal0() + weekday_index(jan1)) / 7
}

/// Number of week columns needed for a year's grid.
pub fn week_count(year: i32) -> u32 {
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31)
        .unwrap_or(NaiveDate::MAX);
    week_index(dec31) + 1
}

/// Every UTC day of a year, Jan 1 through Dec 31 inclusive.
pub fn year_days(year: i32) -> impl Iterator<Item = NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid Jan 1");
    jan1.iter_days().take_while(move |d| d.year() == year)
}

/// Every UTC day in `[start, end]` inclusive.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
