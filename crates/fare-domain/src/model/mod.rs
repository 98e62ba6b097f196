//! Domain model types

pub mod price;
pub mod tariff;
pub mod trip;
pub mod vehicle;

pub use price::{FareBreakdown, Price};
pub use tariff::{DistanceBand, FirstClassRule, HourlyRates, Tariff, VanRule};
pub use trip::{HourlyPricingRequest, PickupTime, PricingRequest, TripPricingRequest};
pub use vehicle::VehicleProfile;
