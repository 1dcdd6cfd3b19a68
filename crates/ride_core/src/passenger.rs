use std::rc::Rc;

use crate::error::ValidationError;
use crate::trip::{PassengerId, Trip};

#[derive(Debug, Clone)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    phone_number: String,
    trips: Vec<Rc<Trip>>,
}

impl Passenger {
    pub fn new(
        id: PassengerId,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            phone_number: phone_number.into(),
            trips: Vec::new(),
        })
    }

    pub fn id(&self) -> PassengerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn trips(&self) -> &[Rc<Trip>] {
        &self.trips
    }

    pub fn add_trip(&mut self, trip: Rc<Trip>) {
        self.trips.push(trip);
    }

    /// Sum of fares over completed trips.
    pub fn total_spent(&self) -> f64 {
        self.trips.iter().map(|trip| trip.cost()).sum()
    }

    /// Seconds spent riding, pending trips excluded.
    pub fn total_time_spent(&self) -> i64 {
        self.trips.iter().map(|trip| trip.duration_in_seconds()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{completed_trip, pending_trip};

    #[test]
    fn rejects_non_positive_id() {
        assert_eq!(
            Passenger::new(-3, "Nobody", "555").unwrap_err(),
            ValidationError::InvalidId(-3)
        );
    }

    #[test]
    fn totals_skip_pending_trips() {
        let mut passenger = Passenger::new(1, "Nina Hintz Sr.", "560.815.3059").expect("passenger");
        passenger.add_trip(Rc::new(completed_trip(1, 4, 12.0, 15, 5)));
        passenger.add_trip(Rc::new(completed_trip(2, 9, 8.5, 5, 4)));
        passenger.add_trip(Rc::new(pending_trip(3, 9)));

        assert_eq!(passenger.trips().len(), 3);
        assert!((passenger.total_spent() - 20.5).abs() < 1e-9);
        assert_eq!(passenger.total_time_spent(), 20 * 60);
    }
}
