//! Progressive per-kilometre charge

use rust_decimal::Decimal;

use crate::model::DistanceBand;

/// Charge for `distance_km` across progressive bands
///
/// Lower bands are used up before higher ones apply, so 25 km on the standard
/// tariff costs 10 × 3.00 + 15 × 2.00, not 25 × 2.00. A band with no width
/// absorbs whatever distance remains.
///
/// Returns `None` when the charge does not fit in a `Decimal`.
pub fn calculate_distance_charge(distance_km: Decimal, bands: &[DistanceBand]) -> Option<Decimal> {
    let mut remaining = distance_km;
    let mut charge = Decimal::ZERO;

    for band in bands {
        if remaining <= Decimal::ZERO {
            break;
        }
        let in_band = match band.width_km {
            Some(width) => remaining.min(width),
            None => remaining,
        };
        if in_band > Decimal::ZERO {
            charge = charge.checked_add(in_band.checked_mul(band.rate_per_km)?)?;
            remaining -= in_band;
        }
    }

    Some(charge)
}
