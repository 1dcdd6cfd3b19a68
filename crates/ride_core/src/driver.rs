use std::rc::Rc;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::payout::{PayoutConfig, SECONDS_PER_HOUR};
use crate::trip::{DriverId, Trip};

pub const VEHICLE_ID_LEN: usize = 17;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DriverStatus {
    #[default]
    Available,
    Unavailable,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "AVAILABLE",
            DriverStatus::Unavailable => "UNAVAILABLE",
        }
    }
}

impl FromStr for DriverStatus {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(DriverStatus::Available),
            "UNAVAILABLE" => Ok(DriverStatus::Unavailable),
            _ => Err(token.to_string()),
        }
    }
}

/// How long a driver has been without a passenger, ordered from longest idle to busiest.
///
/// `Never` sorts before any `Since`, and `Busy` (latest trip still pending) sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdleSince {
    Never,
    Since(DateTime<Utc>),
    Busy,
}

#[derive(Debug, Clone)]
pub struct Driver {
    id: DriverId,
    name: String,
    vehicle_id: String,
    status: DriverStatus,
    trips: Vec<Rc<Trip>>,
}

impl Driver {
    pub fn new(
        id: DriverId,
        name: impl Into<String>,
        vehicle_id: impl Into<String>,
        status: DriverStatus,
    ) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id));
        }
        let vehicle_id = vehicle_id.into();
        if vehicle_id.chars().count() != VEHICLE_ID_LEN {
            return Err(ValidationError::InvalidVehicleId(vehicle_id));
        }
        Ok(Self {
            id,
            name: name.into(),
            vehicle_id,
            status,
            trips: Vec::new(),
        })
    }

    /// Same as [`Driver::new`] with the default [`DriverStatus::Available`].
    pub fn available(
        id: DriverId,
        name: impl Into<String>,
        vehicle_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(id, name, vehicle_id, DriverStatus::default())
    }

    pub fn id(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn status(&self) -> DriverStatus {
        self.status
    }

    pub fn set_status(&mut self, status: DriverStatus) {
        self.status = status;
    }

    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Available
    }

    pub fn trips(&self) -> &[Rc<Trip>] {
        &self.trips
    }

    pub fn add_trip(&mut self, trip: Rc<Trip>) {
        self.trips.push(trip);
    }

    fn completed_trips(&self) -> impl Iterator<Item = &Rc<Trip>> {
        self.trips.iter().filter(|trip| !trip.is_pending())
    }

    /// Mean rating over completed trips, or 0.0 when there are none.
    pub fn average_rating(&self) -> f64 {
        let ratings: Vec<u8> = self.trips.iter().filter_map(|trip| trip.rating()).collect();
        if ratings.is_empty() {
            return 0.0;
        }
        ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue_with(&PayoutConfig::default())
    }

    pub fn total_revenue_with(&self, config: &PayoutConfig) -> f64 {
        self.completed_trips()
            .map(|trip| config.driver_payout(trip.cost()))
            .sum()
    }

    /// Revenue divided by hours driven; 0.0 when no time has been driven.
    pub fn total_revenue_per_hour(&self) -> f64 {
        let total_seconds: i64 = self.trips.iter().map(|trip| trip.duration_in_seconds()).sum();
        if total_seconds == 0 {
            return 0.0;
        }
        self.total_revenue() / (total_seconds as f64 / SECONDS_PER_HOUR)
    }

    pub fn idle_since(&self) -> IdleSince {
        if self.trips.is_empty() {
            return IdleSince::Never;
        }
        if self.trips.iter().any(|trip| trip.is_pending()) {
            return IdleSince::Busy;
        }
        self.trips
            .iter()
            .filter_map(|trip| trip.end_time())
            .max()
            .map(IdleSince::Since)
            .unwrap_or(IdleSince::Never)
    }
}
