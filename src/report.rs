//! Report type enumeration for the per-driver report tabs.

use strum::EnumIter;

/// The reports available for a driver, in display order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumIter)]
pub enum ReportType {
    #[default]
    Summary,
    IRatingHistory,
    CpiHistory,
    TrackUsage,
    CarUsage,
    SessionList,
    ActivityHistory,
    CarTrackMatrix,
}

impl ReportType {
    /// Stable machine name, kept identical to the backend's report slugs.
    pub fn name(&self) -> &'static str {
        match self {
            ReportType::Summary => "summary",
            ReportType::IRatingHistory => "iracing-history",
            ReportType::CpiHistory => "cpi-history",
            ReportType::TrackUsage => "track-usage",
            ReportType::CarUsage => "car-usage",
            ReportType::SessionList => "session-list",
            ReportType::ActivityHistory => "activity-history",
            ReportType::CarTrackMatrix => "car-track-matrix",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportType::Summary => "Summary",
            ReportType::IRatingHistory => "iRating History",
            ReportType::CpiHistory => "CPI History",
            ReportType::TrackUsage => "Track Usage",
            ReportType::CarUsage => "Car Usage",
            ReportType::SessionList => "Session List",
            ReportType::ActivityHistory => "Activity History",
            ReportType::CarTrackMatrix => "Car/Track Matrix",
        }
    }

    /// Parse a stored report slug, falling back to the summary report.
    pub fn from_name(name: &str) -> Self {
        use strum::IntoEnumIterator;
        Self::iter()
            .find(|report| report.name() == name)
            .unwrap_or_default()
    }
}
