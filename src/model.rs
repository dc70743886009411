//! Core data model: session records and reference data.
//!
//! These types mirror the JSON shapes served by the stats backend
//! (`/api/v1/...`). Sessions are immutable once fetched; the only parsing
//! done here is converting `start_time` into a typed UTC timestamp at the
//! deserialization boundary.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// A session referenced a car or track that is missing from the reference
/// tables. This indicates a stale reference table and is surfaced as a hard
/// error rather than rendering unlabeled data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown track_id {0} (stale track table?)")]
    UnknownTrack(i32),
    #[error("unknown car_id {0} (stale car table?)")]
    UnknownCar(i32),
}

// ============================================================================
// Enums
// ============================================================================

/// License category (discipline) classification.
///
/// The numeric encoding follows the backend database. Categories 5 and 6
/// were introduced when the road discipline was split into sports-car and
/// formula-car in March 2024.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "i32")]
pub enum CategoryType {
    Oval = 1,
    Road = 2,
    DirtOval = 3,
    DirtRoad = 4,
    SportsCar = 5,
    FormulaCar = 6,
}

impl CategoryType {
    pub fn nice_name(&self) -> &'static str {
        match self {
            CategoryType::Oval => "Oval",
            CategoryType::Road => "Road",
            CategoryType::DirtOval => "Dirt Oval",
            CategoryType::DirtRoad => "Dirt Road",
            CategoryType::SportsCar => "Sports Car",
            CategoryType::FormulaCar => "Formula Car",
        }
    }
}

impl TryFrom<i32> for CategoryType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CategoryType::Oval),
            2 => Ok(CategoryType::Road),
            3 => Ok(CategoryType::DirtOval),
            4 => Ok(CategoryType::DirtRoad),
            5 => Ok(CategoryType::SportsCar),
            6 => Ok(CategoryType::FormulaCar),
            other => Err(format!("invalid category id {}", other)),
        }
    }
}

/// Legacy per-subsession event classification.
///
/// Older data encoded "is this a race" as `event_type == 5`. That encoding
/// is retained here so the field still round-trips through the API, but
/// predicates classify sessions by [`SimsessionType`] only (see
/// `filters::is_race`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i32")]
pub enum EventType {
    Practice = 2,
    Qualify = 3,
    TimeTrial = 4,
    Race = 5,
}

impl TryFrom<i32> for EventType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(EventType::Practice),
            3 => Ok(EventType::Qualify),
            4 => Ok(EventType::TimeTrial),
            5 => Ok(EventType::Race),
            other => Err(format!("invalid event type {}", other)),
        }
    }
}

/// Per-simsession segment classification. This is the canonical source for
/// the race predicate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i32")]
pub enum SimsessionType {
    OpenPractice = 3,
    LoneQualifying = 4,
    OpenQualifying = 5,
    Race = 6,
}

impl TryFrom<i32> for SimsessionType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(SimsessionType::OpenPractice),
            4 => Ok(SimsessionType::LoneQualifying),
            5 => Ok(SimsessionType::OpenQualifying),
            6 => Ok(SimsessionType::Race),
            other => Err(format!("invalid simsession type {}", other)),
        }
    }
}

// ============================================================================
// Records
// ============================================================================

/// One recorded participation (practice/qualify/race) by a driver.
///
/// `average_lap` and all derived durations are measured in ten-thousandths
/// of a second, the unit used by the backend (see [`crate::units`]).
/// `new_irating == -1` marks a rookie (unrated) session.
#[derive(Clone, Debug, Deserialize)]
pub struct Session {
    pub subsession_id: i64,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub series_name: String,
    pub event_type: EventType,
    pub simsession_number: i32,
    pub simsession_type: SimsessionType,
    pub official_session: bool,
    pub license_category: CategoryType,
    pub car_id: i32,
    pub track_id: i32,
    pub package_id: i32,
    pub laps_complete: i32,
    pub average_lap: i64,
    pub incidents: i32,
    pub old_irating: i32,
    pub new_irating: i32,
    pub new_cpi: f32,
    pub finish_position_in_class: i32,
}

impl Session {
    /// Total time spent in this session, in ten-thousandths of a second.
    pub fn time_in_session(&self) -> i64 {
        self.average_lap * self.laps_complete as i64
    }

    /// iRating gained or lost in this session.
    pub fn irating_delta(&self) -> i32 {
        self.new_irating - self.old_irating
    }
}

/// Track descriptor, keyed by `track_id`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Track {
    pub track_id: i32,
    pub track_name: String,
    /// Length of this configuration in kilometers.
    pub track_config_length: f64,
    pub corners_per_lap: i32,
    pub category: CategoryType,
}

/// Car descriptor, keyed by `car_id`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Car {
    pub car_id: i32,
    pub car_name: String,
    pub car_name_abbreviated: String,
}

// ============================================================================
// Reference Data
// ============================================================================

/// Load-once lookup tables for car and track descriptors.
///
/// Misses are reported as [`LookupError`] so stale reference data fails
/// loudly instead of producing unlabeled chart axes.
#[derive(Clone, Debug, Default)]
pub struct ReferenceData {
    tracks: HashMap<i32, Track>,
    cars: HashMap<i32, Car>,
}

impl ReferenceData {
    pub fn new(tracks: Vec<Track>, cars: Vec<Car>) -> Self {
        Self {
            tracks: tracks.into_iter().map(|t| (t.track_id, t)).collect(),
            cars: cars.into_iter().map(|c| (c.car_id, c)).collect(),
        }
    }

    pub fn track(&self, track_id: i32) -> Result<&Track, LookupError> {
        self.tracks
            .get(&track_id)
            .ok_or(LookupError::UnknownTrack(track_id))
    }

    pub fn car(&self, car_id: i32) -> Result<&Car, LookupError> {
        self.cars.get(&car_id).ok_or(LookupError::UnknownCar(car_id))
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn car_count(&self) -> usize {
        self.cars.len()
    }
}
