//! Vehicle-class multiplier rules

use fare_types::VehicleClass;
use rust_decimal::Decimal;

use crate::model::Tariff;

/// Multiplier applied to (base fare + airport fee + distance charge)
///
/// - Business: flat.
/// - First: steps *down* once the trip is longer than the breakpoint; the
///   breakpoint itself still uses the higher multiplier.
/// - Van: grows linearly with distance, capped. A slope too large to represent
///   is past the cap by definition.
pub fn class_multiplier(class: VehicleClass, distance_km: Decimal, tariff: &Tariff) -> Decimal {
    match class {
        VehicleClass::Business => tariff.business_multiplier,
        VehicleClass::First => {
            let rule = &tariff.first_class;
            if distance_km <= rule.breakpoint_km {
                rule.short_multiplier
            } else {
                rule.long_multiplier
            }
        }
        VehicleClass::Van => {
            let rule = &tariff.van;
            rule.multiplier_per_km
                .checked_mul(distance_km)
                .and_then(|growth| growth.checked_add(rule.base_multiplier))
                .map_or(rule.max_multiplier, |multiplier| multiplier.min(rule.max_multiplier))
        }
    }
}
