//! CSV fixture loading.
//!
//! Each table has a header row. Rows are deserialized with serde, then turned
//! into validated entities; any failure carries the file path and line number.
//!
//! - `drivers.csv`: `id,name,vin,status`
//! - `passengers.csv`: `id,name,phone_num`
//! - `trips.csv`: `id,driver_id,passenger_id,start_time,end_time,cost,rating`
//!
//! Timestamps are RFC 3339 (`2016-04-05T14:01:00+00:00`); the
//! `2016-04-05 14:01:00 +0000` form is accepted as well.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::driver::{Driver, DriverStatus};
use crate::error::{LoadError, ValidationError};
use crate::passenger::Passenger;
use crate::trip::{Trip, TripOutcome};

pub const DRIVERS_FILE: &str = "drivers.csv";
pub const PASSENGERS_FILE: &str = "passengers.csv";
pub const TRIPS_FILE: &str = "trips.csv";

const ALT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Locations of the three fixture tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    pub drivers: PathBuf,
    pub passengers: PathBuf,
    pub trips: PathBuf,
}

impl FixturePaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            drivers: dir.join(DRIVERS_FILE),
            passengers: dir.join(PASSENGERS_FILE),
            trips: dir.join(TRIPS_FILE),
        }
    }
}

impl Default for FixturePaths {
    /// The fixtures bundled with this crate.
    ///
    /// The directory is resolved at compile time from the crate's manifest
    /// path, so it only exists on the machine that built the crate.
    fn default() -> Self {
        Self::in_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
    }
}

#[derive(Debug, Deserialize)]
struct DriverRecord {
    id: i64,
    name: String,
    vin: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct PassengerRecord {
    id: i64,
    name: String,
    phone_num: String,
}

/// A trip row with its foreign keys still unresolved.
#[derive(Debug, Deserialize)]
struct TripRecord {
    id: i64,
    driver_id: i64,
    passenger_id: i64,
    start_time: String,
    end_time: String,
    cost: f64,
    rating: i64,
}

/// Read every row of `path`, handing each one with its line number to `build`.
fn read_rows<R, T>(
    path: &Path,
    mut build: impl FnMut(R, u64) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError>
where
    R: DeserializeOwned,
{
    let csv_error = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        let row: R = record.deserialize(Some(&headers)).map_err(csv_error)?;
        rows.push(build(row, line)?);
    }
    Ok(rows)
}

fn validation(path: &Path, line: u64) -> impl FnOnce(ValidationError) -> LoadError + '_ {
    move |source| LoadError::Validation {
        path: path.to_path_buf(),
        line,
        source,
    }
}

pub fn load_drivers(path: &Path) -> Result<Vec<Driver>, LoadError> {
    read_rows(path, |row: DriverRecord, line| {
        let status: DriverStatus = row.status.parse().map_err(|value| LoadError::UnknownStatus {
            path: path.to_path_buf(),
            line,
            value,
        })?;
        Driver::new(row.id, row.name, row.vin, status).map_err(validation(path, line))
    })
}

pub fn load_passengers(path: &Path) -> Result<Vec<Passenger>, LoadError> {
    read_rows(path, |row: PassengerRecord, line| {
        Passenger::new(row.id, row.name, row.phone_num).map_err(validation(path, line))
    })
}

/// Load completed trips. Driver and passenger ids are not resolved here.
pub fn load_trips(path: &Path) -> Result<Vec<Trip>, LoadError> {
    read_rows(path, |row: TripRecord, line| {
        let start_time = parse_timestamp(&row.start_time, path, line)?;
        let end_time = parse_timestamp(&row.end_time, path, line)?;
        let rating = u8::try_from(row.rating)
            .map_err(|_| ValidationError::RatingOutOfRange(row.rating))
            .map_err(validation(path, line))?;
        Trip::new(
            row.id,
            row.driver_id,
            row.passenger_id,
            start_time,
            TripOutcome::Completed {
                end_time,
                cost: row.cost,
                rating,
            },
        )
        .map_err(validation(path, line))
    })
}

fn parse_timestamp(value: &str, path: &Path, line: u64) -> Result<DateTime<Utc>, LoadError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, ALT_TIMESTAMP_FORMAT))
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|source| LoadError::Timestamp {
            path: path.to_path_buf(),
            line,
            value: value.to_string(),
            source,
        })
}
