//! Tests for:
//! - Session predicates and the date-corrected category rule
//! - History series construction (including the road split)
//! - Usage aggregation and the car/track matrix
//! - Chart scene builders (line, bar, frequency, heatmap)

pub mod filter_tests;
pub mod history_tests;
pub mod matrix_tests;
pub mod scene_tests;
pub mod stats_tests;
