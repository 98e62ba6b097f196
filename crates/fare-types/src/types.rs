//! Shared value types for fare pricing

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::PricingError;

/// Vehicle class offered for a booking
///
/// There is no fallback variant: a class outside these three
/// cannot be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Business Class (E-Class, 5 Series or similar)
    Business,
    /// First Class (S-Class, 7 Series or similar)
    First,
    /// Van/SUV (V-Class, Transit or similar)
    Van,
}

impl VehicleClass {
    /// All classes in the order they are offered to customers
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Business, VehicleClass::First, VehicleClass::Van];

    /// Identifier used by the booking site ("Business", "First", "Van")
    pub fn id(&self) -> &'static str {
        match self {
            VehicleClass::Business => "Business",
            VehicleClass::First => "First",
            VehicleClass::Van => "Van",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VehicleClass {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        VehicleClass::ALL
            .into_iter()
            .find(|class| class.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PricingError::UnknownVehicleClass(s.to_string()))
    }
}

/// Pricing model selected by the booking form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingType {
    /// Distance-based transfer between two addresses
    #[default]
    #[value(alias = "distance")]
    #[serde(alias = "distance")]
    PointToPoint,
    /// Chauffeur hired by the hour
    Hourly,
}

impl std::fmt::Display for BookingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingType::PointToPoint => write!(f, "point-to-point"),
            BookingType::Hourly => write!(f, "hourly"),
        }
    }
}
