use crate::driver::Driver;

/// Strategy for choosing which driver takes the next request.
///
/// Implementations only consider drivers whose status is
/// [`crate::driver::DriverStatus::Available`]. The slice is in load order.
///
/// # Returns
///
/// The index into `drivers` of the chosen driver, or `None` when no driver
/// is available.
pub trait DriverSelection {
    fn select(&self, drivers: &[Driver]) -> Option<usize>;
}
