mod support;

use std::fs;
use std::rc::Rc;

use ride_core::{DispatchError, Dispatcher, DriverStatus, FixturePaths, LoadError};
use support::fixture_dispatcher;

#[test]
fn loads_drivers_in_file_order() {
    let dispatcher = fixture_dispatcher();
    let first = dispatcher.drivers().first().expect("first driver");
    let last = dispatcher.drivers().last().expect("last driver");

    assert_eq!(first.name(), "Bernardo Prosacco");
    assert_eq!(first.id(), 1);
    assert_eq!(first.status(), DriverStatus::Unavailable);
    assert_eq!(last.name(), "Minnie Dach");
    assert_eq!(last.id(), 10);
    assert_eq!(last.status(), DriverStatus::Available);
}

#[test]
fn loads_passengers_in_file_order() {
    let dispatcher = fixture_dispatcher();
    let first = dispatcher.passengers().first().expect("first passenger");
    let last = dispatcher.passengers().last().expect("last passenger");

    assert_eq!(first.name(), "Nina Hintz Sr.");
    assert_eq!(first.id(), 1);
    assert_eq!(last.name(), "Miss Isom Gleason");
    assert_eq!(last.id(), 8);
    assert_eq!(
        dispatcher.find_passenger(3).expect("lookup").map(|p| p.phone_number()),
        Some("(206) 720-8225 x2245")
    );
}

#[test]
fn every_trip_is_linked_to_its_driver_and_passenger() {
    let dispatcher = fixture_dispatcher();
    assert_eq!(dispatcher.trips().len(), 12);

    for trip in dispatcher.trips() {
        assert!(!trip.is_pending());
        assert!(trip.start_time() <= trip.end_time().expect("completed trip"));

        let driver = dispatcher
            .find_driver(trip.driver())
            .expect("valid id")
            .expect("driver exists");
        assert!(driver.trips().iter().any(|t| Rc::ptr_eq(t, trip)));

        let passenger = dispatcher
            .find_passenger(trip.passenger())
            .expect("valid id")
            .expect("passenger exists");
        assert!(passenger.trips().iter().any(|t| Rc::ptr_eq(t, trip)));
    }
}

#[test]
fn driver_metrics_from_fixtures() {
    let dispatcher = fixture_dispatcher();
    let driver = dispatcher.find_driver(2).expect("valid id").expect("driver 2");

    // Trips of 10.00 and 20.00 lasting 40 and 60 minutes.
    assert!((driver.total_revenue() - 21.36).abs() < 1e-9);
    assert!((driver.total_revenue_per_hour() - 21.36 / (100.0 / 60.0)).abs() < 1e-9);
    assert!((driver.average_rating() - 4.5).abs() < 1e-9);

    let rookie = dispatcher.find_driver(7).expect("valid id").expect("driver 7");
    assert_eq!(rookie.average_rating(), 0.0);
    assert_eq!(rookie.total_revenue_per_hour(), 0.0);
}

#[test]
fn trip_with_unknown_passenger_fails_to_link() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = FixturePaths::in_dir(dir.path());
    fs::write(
        &paths.drivers,
        "id,name,vin,status\n1,Solo,WBWSS52P9NEYLVDE9,AVAILABLE\n",
    )
    .expect("drivers");
    fs::write(&paths.passengers, "id,name,phone_num\n1,Only,555\n").expect("passengers");
    fs::write(
        &paths.trips,
        "id,driver_id,passenger_id,start_time,end_time,cost,rating\n\
         1,1,2,2016-04-05T14:01:00+00:00,2016-04-05T14:09:00+00:00,17.39,3\n",
    )
    .expect("trips");

    assert!(matches!(
        Dispatcher::load(&paths),
        Err(DispatchError::TripPassengerMissing {
            trip_id: 1,
            passenger_id: 2
        })
    ));
}

#[test]
fn invalid_row_surfaces_as_load_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let paths = FixturePaths::in_dir(dir.path());
    fs::write(&paths.drivers, "id,name,vin,status\n0,Zero,WBWSS52P9NEYLVDE9,AVAILABLE\n")
        .expect("drivers");
    fs::write(&paths.passengers, "id,name,phone_num\n").expect("passengers");
    fs::write(
        &paths.trips,
        "id,driver_id,passenger_id,start_time,end_time,cost,rating\n",
    )
    .expect("trips");

    assert!(matches!(
        Dispatcher::load(&paths),
        Err(DispatchError::Load(LoadError::Validation { line: 2, .. }))
    ));
}
