//! Test helpers for common test setup and utilities.
//!
//! Builders here panic on invalid input; they are meant for fixtures only.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::driver::{Driver, DriverStatus};
use crate::passenger::Passenger;
use crate::trip::{DriverId, PassengerId, Trip, TripId, TripOutcome};

/// A valid 17-character vehicle id.
pub const TEST_VIN: &str = "WBWSS52P9NEYLVDE9";

/// Passenger id used by trip builders that do not take one.
pub const TEST_PASSENGER: PassengerId = 1;

/// Start time shared by every trip builder.
pub fn test_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 4, 5, 14, 1, 0)
        .single()
        .expect("valid test timestamp")
}

/// A completed trip starting at [`test_start`] and lasting `minutes`.
///
/// # Panics
///
/// Panics if the arguments violate trip validation.
pub fn completed_trip(id: TripId, driver: DriverId, cost: f64, minutes: i64, rating: u8) -> Trip {
    Trip::new(
        id,
        driver,
        TEST_PASSENGER,
        test_start(),
        TripOutcome::Completed {
            end_time: test_start() + Duration::minutes(minutes),
            cost,
            rating,
        },
    )
    .expect("valid completed trip")
}

/// A pending trip starting at [`test_start`].
pub fn pending_trip(id: TripId, driver: DriverId) -> Trip {
    Trip::pending(id, driver, TEST_PASSENGER, test_start()).expect("valid pending trip")
}

/// A driver named after its id, with [`TEST_VIN`].
pub fn driver_with_status(id: DriverId, status: DriverStatus) -> Driver {
    Driver::new(id, format!("Driver {id}"), TEST_VIN, status).expect("valid driver")
}

pub fn test_passenger(id: PassengerId) -> Passenger {
    Passenger::new(id, format!("Passenger {id}"), "555-0100").expect("valid passenger")
}
