pub mod algorithm;
pub mod first_available;
pub mod longest_idle;

pub use algorithm::DriverSelection;
pub use first_available::FirstAvailable;
pub use longest_idle::LongestIdle;
