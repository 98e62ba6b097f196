//! Point-to-point fare calculation
//!
//! Order of operations:
//! 1. base fare + airport fee + banded distance charge
//! 2. × vehicle-class multiplier
//! 3. × peak factor
//! 4. round to 2 decimal places
//!
//! The multiplier and the peak factor both act on sums, so the airport fee
//! scales with both.

use fare_types::{PricingError, VehicleClass};
use rust_decimal::Decimal;

use super::{calculate_distance_charge, class_multiplier, is_peak_hour};
use crate::model::{FareBreakdown, PickupTime, Price, Tariff, TripPricingRequest};

/// Price a trip and keep every intermediate value
pub fn calculate_breakdown(request: &TripPricingRequest, tariff: &Tariff) -> Result<FareBreakdown, PricingError> {
    let distance_km = request.distance()?;

    let base_fare = tariff.base_fare;
    let airport_fee = if request.is_airport_transfer {
        tariff.airport_fee
    } else {
        Decimal::ZERO
    };
    // A distance whose fare does not fit in a Decimal cannot be priced
    let too_far = || PricingError::InvalidDistance(request.distance_km);

    let distance_charge = calculate_distance_charge(distance_km, &tariff.distance_bands).ok_or_else(too_far)?;
    let multiplier = class_multiplier(request.vehicle_class, distance_km, tariff);
    let subtotal = base_fare
        .checked_add(airport_fee)
        .and_then(|sum| sum.checked_add(distance_charge))
        .and_then(|sum| sum.checked_mul(multiplier))
        .ok_or_else(too_far)?;

    let is_peak = is_peak_hour(&request.pickup_time, tariff);
    let peak_factor = if is_peak { tariff.peak_factor() } else { Decimal::ONE };
    let total = Price::new(subtotal.checked_mul(peak_factor).ok_or_else(too_far)?);

    log::debug!(
        "{} {} km @ {}: ({} + {} + {}) x {} x {} = {}",
        request.vehicle_class,
        distance_km,
        request.pickup_time,
        base_fare,
        airport_fee,
        distance_charge,
        multiplier,
        peak_factor,
        total
    );

    Ok(FareBreakdown {
        base_fare,
        airport_fee,
        distance_charge,
        class_multiplier: multiplier,
        subtotal,
        is_peak,
        peak_factor,
        total,
    })
}

/// Price a trip against a tariff
pub fn price_trip(request: &TripPricingRequest, tariff: &Tariff) -> Result<Price, PricingError> {
    calculate_breakdown(request, tariff).map(|breakdown| breakdown.total)
}

/// Price a trip on the standard tariff
///
/// `pickup_time` is "HH:MM" (24-hour). Fails on a negative or non-finite
/// distance and on a malformed pickup time.
pub fn calculate_price(
    distance_km: f64,
    vehicle_class: VehicleClass,
    is_airport_transfer: bool,
    pickup_time: &str,
) -> Result<Price, PricingError> {
    let pickup_time: PickupTime = pickup_time.parse()?;
    let request = TripPricingRequest {
        distance_km,
        vehicle_class,
        is_airport_transfer,
        pickup_time,
    };
    price_trip(&request, &Tariff::standard())
}
