//! Vehicle catalog entry

use fare_types::VehicleClass;
use serde::{Deserialize, Serialize};

/// What a customer sees when choosing a vehicle class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub class: VehicleClass,
    /// e.g. "Business Class"
    pub name: String,
    /// Example models, e.g. "Mercedes-Benz E-Class, BMW 5 Series or similar"
    pub description: String,
    /// Maximum passengers
    pub passengers: u32,
    /// Maximum pieces of luggage
    pub luggage: u32,
}
