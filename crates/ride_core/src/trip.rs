//! A single ride between a driver and a passenger.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;

pub type DriverId = i64;
pub type PassengerId = i64;
pub type TripId = i64;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// How a trip ended, or that it has not ended yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TripOutcome {
    Pending,
    Completed {
        end_time: DateTime<Utc>,
        cost: f64,
        rating: u8,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: TripId,
    driver: DriverId,
    passenger: PassengerId,
    start_time: DateTime<Utc>,
    outcome: TripOutcome,
}

impl Trip {
    /// Build a trip, rejecting non-positive ids and inconsistent completed outcomes.
    ///
    /// A [`TripOutcome::Pending`] trip skips the time ordering, rating and cost checks.
    pub fn new(
        id: TripId,
        driver: DriverId,
        passenger: PassengerId,
        start_time: DateTime<Utc>,
        outcome: TripOutcome,
    ) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id));
        }
        if let TripOutcome::Completed {
            end_time,
            cost,
            rating,
        } = outcome
        {
            if start_time > end_time {
                return Err(ValidationError::EndBeforeStart { trip_id: id });
            }
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(ValidationError::RatingOutOfRange(rating.into()));
            }
            if !cost.is_finite() || cost < 0.0 {
                return Err(ValidationError::InvalidCost(cost));
            }
        }
        Ok(Self {
            id,
            driver,
            passenger,
            start_time,
            outcome,
        })
    }

    pub fn pending(
        id: TripId,
        driver: DriverId,
        passenger: PassengerId,
        start_time: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self::new(id, driver, passenger, start_time, TripOutcome::Pending)
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn driver(&self) -> DriverId {
        self.driver
    }

    pub fn passenger(&self) -> PassengerId {
        self.passenger
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn outcome(&self) -> TripOutcome {
        self.outcome
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.outcome, TripOutcome::Pending)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        match self.outcome {
            TripOutcome::Completed { end_time, .. } => Some(end_time),
            TripOutcome::Pending => None,
        }
    }

    /// Fare charged for the ride; zero while pending.
    pub fn cost(&self) -> f64 {
        match self.outcome {
            TripOutcome::Completed { cost, .. } => cost,
            TripOutcome::Pending => 0.0,
        }
    }

    pub fn rating(&self) -> Option<u8> {
        match self.outcome {
            TripOutcome::Completed { rating, .. } => Some(rating),
            TripOutcome::Pending => None,
        }
    }

    /// Elapsed seconds between start and end; zero while pending.
    pub fn duration_in_seconds(&self) -> i64 {
        self.end_time()
            .map(|end| (end - self.start_time).num_seconds())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 4, 5, 14, 1, 0).unwrap()
    }

    fn completed(minutes: i64, rating: u8) -> TripOutcome {
        TripOutcome::Completed {
            end_time: start() + Duration::minutes(minutes),
            cost: 12.5,
            rating,
        }
    }

    #[test]
    fn rejects_end_before_start() {
        let err = Trip::new(1, 1, 1, start(), completed(-5, 4)).unwrap_err();
        assert_eq!(err, ValidationError::EndBeforeStart { trip_id: 1 });
    }

    #[test]
    fn accepts_zero_length_trip() {
        let trip = Trip::new(1, 1, 1, start(), completed(0, 4)).expect("trip");
        assert_eq!(trip.duration_in_seconds(), 0);
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [0, 6] {
            let err = Trip::new(1, 1, 1, start(), completed(10, rating)).unwrap_err();
            assert_eq!(err, ValidationError::RatingOutOfRange(rating.into()));
        }
        for rating in [1, 5] {
            assert!(Trip::new(1, 1, 1, start(), completed(10, rating)).is_ok());
        }
    }

    #[test]
    fn rejects_negative_cost_and_bad_id() {
        let outcome = TripOutcome::Completed {
            end_time: start(),
            cost: -1.0,
            rating: 3,
        };
        assert_eq!(
            Trip::new(1, 1, 1, start(), outcome).unwrap_err(),
            ValidationError::InvalidCost(-1.0)
        );
        assert_eq!(
            Trip::pending(0, 1, 1, start()).unwrap_err(),
            ValidationError::InvalidId(0)
        );
    }

    #[test]
    fn pending_trip_has_no_end_rating_or_duration() {
        let trip = Trip::pending(7, 2, 3, start()).expect("pending trip");
        assert!(trip.is_pending());
        assert_eq!(trip.end_time(), None);
        assert_eq!(trip.rating(), None);
        assert_eq!(trip.cost(), 0.0);
        assert_eq!(trip.duration_in_seconds(), 0);
    }

    #[test]
    fn duration_is_end_minus_start() {
        let trip = Trip::new(1, 1, 1, start(), completed(30, 5)).expect("trip");
        assert_eq!(trip.duration_in_seconds(), 1800);
        assert_eq!(trip.rating(), Some(5));
    }
}
