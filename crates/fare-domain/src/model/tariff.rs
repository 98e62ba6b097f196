//! Tariff: every constant the pricing services use
//!
//! The standard tariff is the published price list. Tariff files may override
//! any subset of fields; missing fields fall back to the standard values.

use fare_types::{PricingError, VehicleClass};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One progressive distance band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceBand {
    /// Kilometres covered by this band, `None` for the final unbounded band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_km: Option<Decimal>,
    pub rate_per_km: Decimal,
}

/// First Class multiplier: a step down past the breakpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstClassRule {
    /// Distances up to and including this use `short_multiplier`
    pub breakpoint_km: Decimal,
    pub short_multiplier: Decimal,
    pub long_multiplier: Decimal,
}

impl Default for FirstClassRule {
    fn default() -> Self {
        Self {
            breakpoint_km: Decimal::new(20, 0),
            short_multiplier: Decimal::new(15, 1),
            long_multiplier: Decimal::new(13, 1),
        }
    }
}

/// Van multiplier: grows linearly with distance up to a cap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VanRule {
    pub base_multiplier: Decimal,
    pub multiplier_per_km: Decimal,
    pub max_multiplier: Decimal,
}

impl Default for VanRule {
    fn default() -> Self {
        Self {
            base_multiplier: Decimal::new(14, 1),
            multiplier_per_km: Decimal::new(2, 3),
            max_multiplier: Decimal::new(19, 1),
        }
    }
}

/// Per-hour rates for hourly hire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyRates {
    pub business: Decimal,
    pub first: Decimal,
    pub van: Decimal,
}

impl HourlyRates {
    pub fn rate_for(&self, class: VehicleClass) -> Decimal {
        match class {
            VehicleClass::Business => self.business,
            VehicleClass::First => self.first,
            VehicleClass::Van => self.van,
        }
    }
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            business: Decimal::new(55, 0),
            first: Decimal::new(65, 0),
            van: Decimal::new(70, 0),
        }
    }
}

/// Complete price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub base_fare: Decimal,
    pub airport_fee: Decimal,
    /// Proportional surcharge inside the peak window (0.10 = +10%)
    pub peak_surcharge: Decimal,
    /// First peak hour (inclusive)
    pub peak_start_hour: u32,
    /// End of the peak window (exclusive)
    pub peak_end_hour: u32,
    pub business_multiplier: Decimal,
    pub first_class: FirstClassRule,
    pub van: VanRule,
    pub hourly_rates: HourlyRates,
    /// Applied in order; lower bands are used up before higher ones
    pub distance_bands: Vec<DistanceBand>,
}

impl Tariff {
    /// The published tariff
    pub fn standard() -> Self {
        Self {
            base_fare: Decimal::new(30, 0),
            airport_fee: Decimal::new(10, 0),
            peak_surcharge: Decimal::new(10, 2),
            peak_start_hour: 6,
            peak_end_hour: 13,
            business_multiplier: Decimal::ONE,
            first_class: FirstClassRule::default(),
            van: VanRule::default(),
            hourly_rates: HourlyRates::default(),
            distance_bands: vec![
                DistanceBand {
                    width_km: Some(Decimal::new(10, 0)),
                    rate_per_km: Decimal::new(3, 0),
                },
                DistanceBand {
                    width_km: Some(Decimal::new(30, 0)),
                    rate_per_km: Decimal::new(2, 0),
                },
                DistanceBand {
                    width_km: None,
                    rate_per_km: Decimal::new(15, 1),
                },
            ],
        }
    }

    /// Factor applied to the subtotal inside the peak window
    pub fn peak_factor(&self) -> Decimal {
        Decimal::ONE + self.peak_surcharge
    }

    /// Check the tariff can price every non-negative distance
    pub fn validate(&self) -> Result<(), PricingError> {
        let invalid = |msg: String| Err(PricingError::InvalidTariff(msg));

        let Some((last, leading)) = self.distance_bands.split_last() else {
            return invalid("at least one distance band is required".to_string());
        };
        if last.width_km.is_some() {
            return invalid("the final distance band must be unbounded".to_string());
        }
        for (index, band) in leading.iter().enumerate() {
            match band.width_km {
                Some(width) if width > Decimal::ZERO => {}
                Some(width) => {
                    return invalid(format!("band {} has non-positive width {}", index + 1, width))
                }
                None => return invalid(format!("band {} is unbounded but is not the last band", index + 1)),
            }
        }
        if let Some(band) = self.distance_bands.iter().find(|b| b.rate_per_km.is_sign_negative()) {
            return invalid(format!("negative rate per km {}", band.rate_per_km));
        }

        if self.peak_start_hour >= self.peak_end_hour || self.peak_end_hour > 24 {
            return invalid(format!(
                "peak window {}..{} must satisfy start < end <= 24",
                self.peak_start_hour, self.peak_end_hour
            ));
        }

        let money = [
            ("base_fare", self.base_fare),
            ("airport_fee", self.airport_fee),
            ("peak_surcharge", self.peak_surcharge),
            ("hourly_rates.business", self.hourly_rates.business),
            ("hourly_rates.first", self.hourly_rates.first),
            ("hourly_rates.van", self.hourly_rates.van),
        ];
        if let Some((name, value)) = money.iter().find(|(_, v)| v.is_sign_negative()) {
            return invalid(format!("{} must not be negative (got {})", name, value));
        }

        let multipliers = [
            ("business_multiplier", self.business_multiplier),
            ("first_class.short_multiplier", self.first_class.short_multiplier),
            ("first_class.long_multiplier", self.first_class.long_multiplier),
            ("van.base_multiplier", self.van.base_multiplier),
            ("van.max_multiplier", self.van.max_multiplier),
        ];
        if let Some((name, value)) = multipliers.iter().find(|(_, v)| *v <= Decimal::ZERO) {
            return invalid(format!("{} must be positive (got {})", name, value));
        }
        if self.van.multiplier_per_km.is_sign_negative() {
            return invalid("van.multiplier_per_km must not be negative".to_string());
        }
        if self.van.max_multiplier < self.van.base_multiplier {
            return invalid("van.max_multiplier is below van.base_multiplier".to_string());
        }

        Ok(())
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}
