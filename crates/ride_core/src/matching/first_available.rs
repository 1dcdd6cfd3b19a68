use crate::driver::Driver;

use super::algorithm::DriverSelection;

/// First available driver in load order.
///
/// O(n) scan with no ranking; the baseline used by `request_trip`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailable;

impl DriverSelection for FirstAvailable {
    fn select(&self, drivers: &[Driver]) -> Option<usize> {
        drivers.iter().position(Driver::is_available)
    }
}
