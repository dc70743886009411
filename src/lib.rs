//! irstats - a desktop dashboard for iRacing driver statistics
//!
//! This library fetches per-driver session history from a stats backend
//! and renders it as a set of reports: rating and safety history lines,
//! car/track usage rankings, a calendar activity heatmap and a car/track
//! usage matrix.
//!
//! ## Module Structure
//!
//! - [`api`] - Blocking HTTP client for the stats backend
//! - [`app`] - Main application state and eframe::App implementation
//! - [`model`] - Session, car and track types shared with the backend
//! - [`units`] - Duration conversions and display formatting
//! - [`calendar`] - Day bucketing and week/weekday grid coordinates
//! - [`filters`] - Session predicates (race, official, category)
//! - [`color`] - Three-stop color scale for the heatmaps
//! - [`plot`] - Pure scene builders for the four chart kinds
//! - [`aggregate`] - Session aggregation behind each report
//! - [`report`] - Report tab enumeration
//! - [`settings`] - User settings persistence
//! - [`state`] - Per-tab state and chart constants
//! - [`ui`] - Report views
//!   - `line_plot` - Step-line charts via egui_plot
//!   - `bar_chart` - Ranking bars
//!   - `frequency_map` - Calendar heatmap
//!   - `heatmap` - Car/track matrix
//!   - `session_list` - Race result table
//!   - `stats_panel` - Career summary
//!   - `tab_bar` - Driver and report tab bars

pub mod aggregate;
pub mod api;
pub mod app;
pub mod calendar;
pub mod color;
pub mod filters;
pub mod model;
pub mod plot;
pub mod report;
pub mod settings;
pub mod state;
pub mod ui;
pub mod units;
