//! Hourly hire pricing
//!
//! Rate × hours plus the airport fee. Distance bands and the peak surcharge
//! do not apply.

use fare_types::{PricingError, VehicleClass};
use rust_decimal::Decimal;

use crate::model::{HourlyPricingRequest, Price, Tariff};

/// Price an hourly booking against a tariff
pub fn price_hourly(request: &HourlyPricingRequest, tariff: &Tariff) -> Result<Price, PricingError> {
    let hours = request.hours()?;
    let rate = tariff.hourly_rates.rate_for(request.vehicle_class);
    let airport_fee = if request.is_airport_transfer {
        tariff.airport_fee
    } else {
        Decimal::ZERO
    };
    let total = rate
        .checked_mul(Decimal::from(hours))
        .and_then(|charge| charge.checked_add(airport_fee))
        .map(Price::new)
        .ok_or_else(|| PricingError::InvalidTariff(format!("{} x {}h is too large to price", rate, hours)))?;

    log::debug!(
        "{} hourly: {} x {}h + {} = {}",
        request.vehicle_class,
        rate,
        hours,
        airport_fee,
        total
    );

    Ok(total)
}

/// Price an hourly booking on the standard tariff
///
/// Zero hours is rejected rather than priced as a free booking.
pub fn calculate_hourly_price(
    vehicle_class: VehicleClass,
    hours: u32,
    is_airport_transfer: bool,
) -> Result<Price, PricingError> {
    let request = HourlyPricingRequest {
        vehicle_class,
        hours: Some(hours),
        is_airport_transfer,
    };
    price_hourly(&request, &Tariff::standard())
}
