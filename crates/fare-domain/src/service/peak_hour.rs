//! Peak-hour detection

use crate::model::{PickupTime, Tariff};

/// Whether the pickup falls in the peak window (start inclusive, end exclusive)
///
/// Only the hour counts: with the standard 6..13 window, 12:59 is peak and
/// 13:00 is not.
pub fn is_peak_hour(pickup_time: &PickupTime, tariff: &Tariff) -> bool {
    let hour = pickup_time.hour();
    hour >= tariff.peak_start_hour && hour < tariff.peak_end_hour
}
