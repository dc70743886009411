//! Common test fixtures shared across the test modules.
//!
//! Provides a session builder with sensible defaults (an official rated
//! main-event road race) and a small reference data set so tests only
//! spell out the fields they care about.

use chrono::{DateTime, TimeZone, Utc};
use irstats::model::{
    Car, CategoryType, EventType, ReferenceData, Session, SimsessionType, Track,
};

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Cars known to [`reference_data`].
pub const MX5: i32 = 1;
pub const SKIP_BARBER: i32 = 2;

/// Tracks known to [`reference_data`]: `(track_id, package_id)`.
pub const OKAYAMA: (i32, i32) = (10, 100);
pub const DAYTONA_OVAL: (i32, i32) = (11, 101);
pub const LIME_ROCK: (i32, i32) = (12, 102);

pub fn reference_data() -> ReferenceData {
    let tracks = vec![
        Track {
            track_id: OKAYAMA.0,
            track_name: "Okayama Short".to_string(),
            track_config_length: 3.7,
            corners_per_lap: 13,
            category: CategoryType::Road,
        },
        Track {
            track_id: DAYTONA_OVAL.0,
            track_name: "Daytona Oval".to_string(),
            track_config_length: 4.0,
            corners_per_lap: 4,
            category: CategoryType::Oval,
        },
        Track {
            track_id: LIME_ROCK.0,
            track_name: "Lime Rock Park".to_string(),
            track_config_length: 2.4,
            corners_per_lap: 7,
            category: CategoryType::Road,
        },
    ];
    let cars = vec![
        Car {
            car_id: MX5,
            car_name: "Mazda MX-5 Cup".to_string(),
            car_name_abbreviated: "MX-5".to_string(),
        },
        Car {
            car_id: SKIP_BARBER,
            car_name: "Skip Barber RT2000".to_string(),
            car_name_abbreviated: "SBRS".to_string(),
        },
        Car {
            car_id: 3,
            car_name: "Dallara F3".to_string(),
            car_name_abbreviated: "F3".to_string(),
        },
    ];
    ReferenceData::new(tracks, cars)
}

/// Builds a [`Session`] that is, by default, an official rated main-event
/// road race at Okayama in the MX-5.
pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            session: Session {
                subsession_id: 1,
                start_time: utc(2023, 6, 1),
                series_name: "Test Series".to_string(),
                event_type: EventType::Race,
                simsession_number: 0,
                simsession_type: SimsessionType::Race,
                official_session: true,
                license_category: CategoryType::Road,
                car_id: MX5,
                track_id: OKAYAMA.0,
                package_id: OKAYAMA.1,
                laps_complete: 10,
                average_lap: 600_000, // one minute
                incidents: 2,
                old_irating: 1500,
                new_irating: 1550,
                new_cpi: 30.0,
                finish_position_in_class: 3,
            },
        }
    }

    pub fn subsession_id(mut self, id: i64) -> Self {
        self.session.subsession_id = id;
        self
    }

    pub fn start(mut self, year: i32, month: u32, day: u32) -> Self {
        self.session.start_time = utc(year, month, day);
        self
    }

    pub fn start_time(mut self, time: DateTime<Utc>) -> Self {
        self.session.start_time = time;
        self
    }

    pub fn car(mut self, car_id: i32) -> Self {
        self.session.car_id = car_id;
        self
    }

    pub fn track(mut self, track: (i32, i32)) -> Self {
        self.session.track_id = track.0;
        self.session.package_id = track.1;
        self
    }

    pub fn category(mut self, category: CategoryType) -> Self {
        self.session.license_category = category;
        self
    }

    pub fn laps(mut self, laps: i32) -> Self {
        self.session.laps_complete = laps;
        self
    }

    pub fn average_lap(mut self, ticks: i64) -> Self {
        self.session.average_lap = ticks;
        self
    }

    pub fn incidents(mut self, incidents: i32) -> Self {
        self.session.incidents = incidents;
        self
    }

    pub fn irating(mut self, old: i32, new: i32) -> Self {
        self.session.old_irating = old;
        self.session.new_irating = new;
        self
    }

    pub fn rookie(mut self) -> Self {
        self.session.new_irating = -1;
        self
    }

    pub fn new_cpi(mut self, cpi: f32) -> Self {
        self.session.new_cpi = cpi;
        self
    }

    pub fn practice(mut self) -> Self {
        self.session.event_type = EventType::Practice;
        self.session.simsession_type = SimsessionType::OpenPractice;
        self
    }

    pub fn attached_segment(mut self, simsession_number: i32) -> Self {
        self.session.simsession_number = simsession_number;
        self
    }

    pub fn unofficial(mut self) -> Self {
        self.session.official_session = false;
        self
    }

    pub fn build(self) -> Session {
        self.session
    }
}
