//! Driver payout arithmetic.

/// Flat fee deducted from every fare before the driver's share is applied.
pub const DRIVER_FEE: f64 = 1.65;

/// Fraction of the fare (after the flat fee) credited to the driver.
pub const DRIVER_REVENUE_SHARE: f64 = 0.80;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Payout parameters. Defaults match [`DRIVER_FEE`] and [`DRIVER_REVENUE_SHARE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoutConfig {
    pub driver_fee: f64,
    pub driver_share: f64,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            driver_fee: DRIVER_FEE,
            driver_share: DRIVER_REVENUE_SHARE,
        }
    }
}

impl PayoutConfig {
    /// Driver earnings for a single fare: `(fare - driver_fee) * driver_share`.
    ///
    /// Not floored at zero; a fare below the fee yields a negative payout.
    pub fn driver_payout(&self, fare: f64) -> f64 {
        (fare - self.driver_fee) * self.driver_share
    }
}
