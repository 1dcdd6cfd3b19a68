use crate::driver::Driver;

use super::algorithm::DriverSelection;

/// Available driver who has waited longest for a passenger.
///
/// Ranking, from most to least preferred:
/// 1. drivers who have never had a trip, in load order
/// 2. drivers whose most recent trip ended earliest
/// 3. drivers whose latest trip is still pending
///
/// Ties keep load order.
#[derive(Debug, Default, Clone, Copy)]
pub struct LongestIdle;

impl DriverSelection for LongestIdle {
    fn select(&self, drivers: &[Driver]) -> Option<usize> {
        // min_by_key returns the first of equal minima, which preserves load order.
        drivers
            .iter()
            .enumerate()
            .filter(|(_, driver)| driver.is_available())
            .min_by_key(|(_, driver)| driver.idle_since())
            .map(|(index, _)| index)
    }
}
