#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use ride_core::{Dispatcher, FixedClock, FixturePaths};

/// Instant stamped on every trip requested in these tests.
pub fn request_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 3, 1, 9, 30, 0)
        .single()
        .expect("valid request time")
}

/// Dispatcher over the bundled fixtures with a fixed clock.
pub fn fixture_dispatcher() -> Dispatcher {
    Dispatcher::load(&FixturePaths::default())
        .expect("bundled fixtures load")
        .with_clock(Box::new(FixedClock(request_time())))
}

/// Ids of drivers currently marked available, in load order.
pub fn available_ids(dispatcher: &Dispatcher) -> Vec<i64> {
    dispatcher.available_drivers().map(|driver| driver.id()).collect()
}
