//! Monetary values produced by the pricing services

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of decimal places every price is rounded to
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// A final price, always rounded to two decimal places (half away from zero)
///
/// The amount is currency-agnostic; only the formatter assumes GBP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Round an exact amount into a price
    pub fn new(amount: Decimal) -> Self {
        Price(amount.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero))
    }

    /// The rounded amount
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

/// Saturates at `Decimal::MAX`
impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        Price::new(iter.fold(Decimal::ZERO, |total, price| total.saturating_add(price.0)))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Every intermediate of a point-to-point price
///
/// `total` is the only rounded value; the components are kept exact so the
/// breakdown can be re-derived without drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub base_fare: Decimal,
    pub airport_fee: Decimal,
    pub distance_charge: Decimal,
    pub class_multiplier: Decimal,
    /// (base + airport fee + distance charge) × class multiplier
    pub subtotal: Decimal,
    pub is_peak: bool,
    pub peak_factor: Decimal,
    pub total: Price,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_rounds_half_away_from_zero() {
        assert_eq!(Price::new(dec!(10.005)).amount(), dec!(10.01));
        assert_eq!(Price::new(dec!(10.004)).amount(), dec!(10.00));
        assert_eq!(Price::new(dec!(148.5)).amount(), dec!(148.50));
    }

    #[test]
    fn test_price_display_always_has_two_decimals() {
        assert_eq!(Price::new(dec!(99)).to_string(), "99.00");
        assert_eq!(Price::new(dec!(4.5)).to_string(), "4.50");
        assert_eq!(Price::new(dec!(0.129)).to_string(), "0.13");
    }

    #[test]
    fn test_prices_sum_exactly() {
        let total: Price = [dec!(0.10), dec!(0.20), dec!(99.00)].into_iter().map(Price::new).sum();
        assert_eq!(total.amount(), dec!(99.30));
    }

    #[test]
    fn test_sum_of_huge_prices_saturates() {
        let total: Price = [Price::new(Decimal::MAX), Price::new(dec!(1))].into_iter().sum();
        assert_eq!(total.amount(), Decimal::MAX);
    }

    #[test]
    fn test_price_serializes_transparently() {
        let json = serde_json::to_string(&Price::new(dec!(219.999))).unwrap();
        assert!(json.starts_with('"'), "expected a JSON string, got {}", json);
        let amount: Decimal = json.trim_matches('"').parse().unwrap();
        assert_eq!(amount, dec!(220.00));
    }
}
