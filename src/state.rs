//! Application state types and chart constants.

use crate::color::Rgb;
use crate::model::{CategoryType, Session};
use crate::plot::line::HorizontalLane;
use crate::report::ReportType;

// ============================================================================
// Constants
// ============================================================================

/// Background lanes for the CPI history chart: the incident-rate tiers
/// used for license promotion, from red (risky) to blue (clean).
pub const CPI_LANES: &[(f64, f64, Rgb)] = &[
    (0.0, 10.0, [135, 30, 28]),
    (10.0, 20.0, [191, 78, 48]),
    (20.0, 30.0, [253, 193, 73]),
    (30.0, 40.0, [113, 120, 78]),
    (40.0, 1000.0, [71, 108, 155]),
];

/// Pixel size of one calendar/matrix heatmap cell.
pub const HEATMAP_CELL_SIZE: f32 = 12.0;

/// Gap between heatmap cells in pixels.
pub const HEATMAP_CELL_GAP: f32 = 2.0;

/// Left margin reserved for bar chart labels.
pub const BAR_LABEL_WIDTH: f32 = 250.0;

/// Build the CPI lanes as plot lane values.
pub fn cpi_lanes() -> Vec<HorizontalLane> {
    CPI_LANES
        .iter()
        .map(|&(min, max, color)| HorizontalLane { min, max, color })
        .collect()
}

/// The disciplines selectable in the history reports.
pub const SELECTABLE_CATEGORIES: &[CategoryType] = &[
    CategoryType::Oval,
    CategoryType::Road,
    CategoryType::DirtOval,
    CategoryType::DirtRoad,
    CategoryType::SportsCar,
    CategoryType::FormulaCar,
];

// ============================================================================
// Core Types
// ============================================================================

/// Fully-fetched data for one driver.
#[derive(Clone, Debug)]
pub struct DriverData {
    pub sessions: Vec<Session>,
}

/// Fetch lifecycle of a driver tab.
#[derive(Clone, Debug, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Loaded(DriverData),
    Failed(String),
}

/// One top-level driver tab and its report selection.
///
/// Not `Clone`: the tab owns the fetched session vector, and render code
/// borrows the active tab rather than copying it.
#[derive(Debug)]
pub struct DriverTab {
    pub driver_name: String,
    pub state: FetchState,
    /// Monotonic request id; responses from older requests are dropped
    /// (last-write-wins when the driver or backend changes mid-flight).
    pub generation: u64,
    pub report: ReportType,
    pub category: CategoryType,
}

impl DriverTab {
    pub fn new(driver_name: String) -> Self {
        Self {
            driver_name,
            state: FetchState::Idle,
            generation: 0,
            report: ReportType::default(),
            category: CategoryType::Road,
        }
    }
}
