//! Blocking client for the stats backend (`/api/v1/...`).
//!
//! The client runs on a background thread (see `app`); chart code never
//! touches the network. All payloads are plain JSON arrays deserialized
//! into the `model` types.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Car, ReferenceData, Session, Track};

/// User agent for API requests
const USER_AGENT: &str = concat!("irstats/", env!("CARGO_PKG_VERSION"));

/// Default backend when the settings file has none.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error during request
    #[error("Network error: {0}")]
    NetworkError(String),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiResponseError { status: u16, message: String },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    ParseError(String),
}

// ============================================================================
// Client
// ============================================================================

/// Handle to one backend instance.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = ureq::get(&url).header("User-Agent", USER_AGENT);
        for (key, value) in query {
            request = request.query(*key, *value);
        }

        let mut response = request.call().map_err(|e| match e {
            ureq::Error::StatusCode(status) => ApiError::ApiResponseError {
                status,
                message: format!("HTTP {}", status),
            },
            _ => ApiError::NetworkError(e.to_string()),
        })?;

        response
            .body_mut()
            .read_json()
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }

    /// Fetch every recorded session for a driver.
    pub fn fetch_driver_sessions(&self, driver_name: &str) -> Result<Vec<Session>, ApiError> {
        self.get_json("/api/v1/driver-sessions", &[("driver_name", driver_name)])
    }

    /// Fetch the track descriptor table.
    pub fn fetch_tracks(&self) -> Result<Vec<Track>, ApiError> {
        self.get_json("/api/v1/track-map", &[])
    }

    /// Fetch the car descriptor table.
    pub fn fetch_cars(&self) -> Result<Vec<Car>, ApiError> {
        self.get_json("/api/v1/car-map", &[])
    }

    /// Fetch both reference tables and build the lookup maps.
    pub fn fetch_reference_data(&self) -> Result<ReferenceData, ApiError> {
        let tracks = self.fetch_tracks()?;
        let cars = self.fetch_cars()?;
        tracing::info!(
            tracks = tracks.len(),
            cars = cars.len(),
            "loaded reference data"
        );
        Ok(ReferenceData::new(tracks, cars))
    }
}
