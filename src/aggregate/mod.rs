//! Data-shaping helpers between raw sessions and the plot engine.
//!
//! Everything here is a pure function over an in-memory session slice plus
//! the reference lookup tables. Each render rebuilds its aggregates from
//! scratch; nothing is cached or shared between charts.
//!
//! - [`matrix`] - car x track usage matrix with marginal-sum ordering
//! - [`usage`] - per-car and per-track time/distance totals
//! - [`history`] - rating and CPI time series, road-split aware
//! - [`stats`] - whole-career summary numbers
//! - [`table`] - session list rows

pub mod history;
pub mod matrix;
pub mod stats;
pub mod table;
pub mod usage;
