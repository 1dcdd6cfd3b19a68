//! In-memory ride-share domain: drivers, passengers, trips, and a dispatcher
//! that assigns new ride requests to available drivers.
//!
//! # Quick Start
//!
//! ```no_run
//! use ride_core::{Dispatcher, FixturePaths};
//!
//! let mut dispatcher = Dispatcher::load(&FixturePaths::in_dir("fixtures")).unwrap();
//! if let Some(trip) = dispatcher.assign_by_driver_status(1).unwrap() {
//!     println!("trip {} goes to driver {}", trip.id(), trip.driver());
//! }
//! ```
//!
//! # Modules
//!
//! - [`trip`], [`driver`], [`passenger`]: validated entities
//! - [`payout`]: driver fee and revenue share
//! - [`matching`]: driver selection strategies
//! - [`loader`]: CSV fixtures
//! - [`dispatcher`]: registry and assignment operations

pub mod clock;
pub mod dispatcher;
pub mod driver;
pub mod error;
pub mod loader;
pub mod matching;
pub mod passenger;
pub mod payout;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod trip;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::{Dispatcher, FleetSummary};
pub use driver::{Driver, DriverStatus, IdleSince};
pub use error::{DispatchError, LoadError, ValidationError};
pub use loader::FixturePaths;
pub use passenger::Passenger;
pub use payout::PayoutConfig;
pub use trip::{Trip, TripOutcome};
