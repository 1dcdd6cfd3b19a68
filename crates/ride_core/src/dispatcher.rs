//! Registry of drivers, passengers and trips, and the assignment operations over them.
//!
//! A [`Dispatcher`] is built once, either from CSV fixtures ([`Dispatcher::load`])
//! or from entities already in memory ([`Dispatcher::from_parts`]). Loading links
//! every trip into its driver's and passenger's history. After that the only
//! mutations are appended trips and driver status changes.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::driver::{Driver, DriverStatus};
use crate::error::{DispatchError, ValidationError};
use crate::loader::{self, FixturePaths};
use crate::matching::{DriverSelection, FirstAvailable, LongestIdle};
use crate::passenger::Passenger;
use crate::trip::{DriverId, PassengerId, Trip, TripId};

/// Aggregate counts over a dispatcher's registry.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSummary {
    pub drivers: usize,
    pub available_drivers: usize,
    pub passengers: usize,
    pub trips: usize,
    pub pending_trips: usize,
    pub total_driver_revenue: f64,
}

pub struct Dispatcher {
    drivers: Vec<Driver>,
    passengers: Vec<Passenger>,
    trips: Vec<Rc<Trip>>,
    clock: Box<dyn Clock>,
}

fn require_positive(id: i64) -> Result<(), ValidationError> {
    if id <= 0 {
        return Err(ValidationError::InvalidId(id));
    }
    Ok(())
}

impl Dispatcher {
    /// Read the three fixture tables and link them.
    pub fn load(paths: &FixturePaths) -> Result<Self, DispatchError> {
        let drivers = loader::load_drivers(&paths.drivers)?;
        let passengers = loader::load_passengers(&paths.passengers)?;
        let trips = loader::load_trips(&paths.trips)?;
        let dispatcher = Self::from_parts(drivers, passengers, trips)?;
        info!(
            drivers = dispatcher.drivers.len(),
            passengers = dispatcher.passengers.len(),
            trips = dispatcher.trips.len(),
            "loaded fixtures"
        );
        Ok(dispatcher)
    }

    /// Link `trips` into the histories of the drivers and passengers they reference.
    ///
    /// Existing trip lists on the given drivers and passengers are kept; linked
    /// trips are appended in the order given.
    pub fn from_parts(
        mut drivers: Vec<Driver>,
        mut passengers: Vec<Passenger>,
        trips: Vec<Trip>,
    ) -> Result<Self, DispatchError> {
        let mut linked = Vec::with_capacity(trips.len());
        for trip in trips {
            let trip = Rc::new(trip);
            let driver = drivers
                .iter_mut()
                .find(|driver| driver.id() == trip.driver())
                .ok_or(DispatchError::TripDriverMissing {
                    trip_id: trip.id(),
                    driver_id: trip.driver(),
                })?;
            driver.add_trip(Rc::clone(&trip));
            let passenger = passengers
                .iter_mut()
                .find(|passenger| passenger.id() == trip.passenger())
                .ok_or(DispatchError::TripPassengerMissing {
                    trip_id: trip.id(),
                    passenger_id: trip.passenger(),
                })?;
            passenger.add_trip(Rc::clone(&trip));
            linked.push(trip);
        }

        Ok(Self {
            drivers,
            passengers,
            trips: linked,
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the time source used for new trips.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn trips(&self) -> &[Rc<Trip>] {
        &self.trips
    }

    pub fn available_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.drivers.iter().filter(|driver| driver.is_available())
    }

    /// Look up a driver by id. A positive id with no match is `Ok(None)`.
    pub fn find_driver(&self, id: DriverId) -> Result<Option<&Driver>, ValidationError> {
        require_positive(id)?;
        Ok(self.drivers.iter().find(|driver| driver.id() == id))
    }

    pub fn driver_mut(&mut self, id: DriverId) -> Result<Option<&mut Driver>, ValidationError> {
        require_positive(id)?;
        Ok(self.drivers.iter_mut().find(|driver| driver.id() == id))
    }

    /// Look up a passenger by id. A positive id with no match is `Ok(None)`.
    pub fn find_passenger(&self, id: PassengerId) -> Result<Option<&Passenger>, ValidationError> {
        require_positive(id)?;
        Ok(self.passengers.iter().find(|passenger| passenger.id() == id))
    }

    /// Start a trip with the first available driver in load order.
    ///
    /// Returns `Ok(None)` when nobody is available. The chosen driver's status
    /// is left unchanged.
    pub fn request_trip(
        &mut self,
        passenger_id: PassengerId,
    ) -> Result<Option<Rc<Trip>>, DispatchError> {
        Ok(self
            .start_trip(passenger_id, &FirstAvailable)?
            .map(|(_, trip)| trip))
    }

    /// Start a trip with the available driver who has waited longest, then
    /// mark that driver unavailable.
    ///
    /// Drivers who never had a trip go first, in load order; the rest are
    /// ordered by when their most recent trip ended. See [`LongestIdle`].
    pub fn assign_by_driver_status(
        &mut self,
        passenger_id: PassengerId,
    ) -> Result<Option<Rc<Trip>>, DispatchError> {
        let Some((index, trip)) = self.start_trip(passenger_id, &LongestIdle)? else {
            return Ok(None);
        };
        self.drivers[index].set_status(DriverStatus::Unavailable);
        Ok(Some(trip))
    }

    pub fn summary(&self) -> FleetSummary {
        FleetSummary {
            drivers: self.drivers.len(),
            available_drivers: self.available_drivers().count(),
            passengers: self.passengers.len(),
            trips: self.trips.len(),
            pending_trips: self.trips.iter().filter(|trip| trip.is_pending()).count(),
            total_driver_revenue: self.drivers.iter().map(Driver::total_revenue).sum(),
        }
    }

    fn next_trip_id(&self) -> Result<TripId, DispatchError> {
        let last_id = self.trips.iter().map(|trip| trip.id()).max().unwrap_or(0);
        last_id
            .checked_add(1)
            .ok_or(DispatchError::TripIdExhausted { last_id })
    }

    /// Build a pending trip for `passenger_id` with the driver `selection` picks
    /// and append it everywhere. Returns the driver's index alongside the trip.
    fn start_trip(
        &mut self,
        passenger_id: PassengerId,
        selection: &dyn DriverSelection,
    ) -> Result<Option<(usize, Rc<Trip>)>, DispatchError> {
        require_positive(passenger_id)?;
        let passenger_index = self
            .passengers
            .iter()
            .position(|passenger| passenger.id() == passenger_id)
            .ok_or(DispatchError::UnknownPassenger(passenger_id))?;

        let Some(driver_index) = selection.select(&self.drivers) else {
            warn!(passenger_id, "no available driver");
            return Ok(None);
        };

        let trip = Rc::new(Trip::pending(
            self.next_trip_id()?,
            self.drivers[driver_index].id(),
            passenger_id,
            self.clock.now(),
        )?);
        self.drivers[driver_index].add_trip(Rc::clone(&trip));
        self.passengers[passenger_index].add_trip(Rc::clone(&trip));
        self.trips.push(Rc::clone(&trip));

        debug!(
            trip_id = trip.id(),
            driver_id = trip.driver(),
            passenger_id,
            "trip started"
        );
        Ok(Some((driver_index, trip)))
    }
}
