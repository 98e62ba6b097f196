//! Repository trait definitions for pricing data

use fare_types::Error;

use crate::model::Tariff;

/// Source of the tariff used to price trips
pub trait TariffRepository {
    /// Load the active tariff
    fn load_tariff(&self) -> Result<Tariff, Error>;
}
