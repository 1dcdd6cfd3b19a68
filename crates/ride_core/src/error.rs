//! Error types shared across the crate.
//!
//! Construction failures are [`ValidationError`]s, fixture problems are
//! [`LoadError`]s, and the dispatcher folds both into [`DispatchError`].
//! A lookup miss is never an error; it is reported as `Ok(None)`.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected input when building a trip, driver, passenger, or resolving an id.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("id must be a positive integer (got {0})")]
    InvalidId(i64),
    #[error("vehicle id must be exactly 17 characters (got {0:?})")]
    InvalidVehicleId(String),
    #[error("trip {trip_id} ends before it starts")]
    EndBeforeStart { trip_id: i64 },
    #[error("rating must be between 1 and 5 (got {0})")]
    RatingOutOfRange(i64),
    #[error("cost must be a non-negative number (got {0})")]
    InvalidCost(f64),
}

/// Failure while reading one of the fixture tables.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}, line {line}: invalid timestamp {value:?}")]
    Timestamp {
        path: PathBuf,
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("{path}, line {line}: unknown driver status {value:?}")]
    UnknownStatus {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("{path}, line {line}: {source}")]
    Validation {
        path: PathBuf,
        line: u64,
        #[source]
        source: ValidationError,
    },
}

/// Failure raised by [`crate::dispatcher::Dispatcher`] operations.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("trip {trip_id} references unknown driver {driver_id}")]
    TripDriverMissing { trip_id: i64, driver_id: i64 },
    #[error("trip {trip_id} references unknown passenger {passenger_id}")]
    TripPassengerMissing { trip_id: i64, passenger_id: i64 },
    #[error("no passenger with id {0}")]
    UnknownPassenger(i64),
    #[error("trip ids exhausted after {last_id}")]
    TripIdExhausted { last_id: i64 },
}
