//! Domain services
//!
//! Pricing rules live here, one module per rule, combined by
//! `fare_calculator` (point-to-point) and `hourly`.

pub mod class_multiplier;
pub mod currency;
pub mod distance_bands;
pub mod fare_calculator;
pub mod hourly;
pub mod peak_hour;

pub use class_multiplier::class_multiplier;
pub use currency::{format_amount, format_price};
pub use distance_bands::calculate_distance_charge;
pub use fare_calculator::{calculate_breakdown, calculate_price, price_trip};
pub use hourly::{calculate_hourly_price, price_hourly};
pub use peak_hour::is_peak_hour;
