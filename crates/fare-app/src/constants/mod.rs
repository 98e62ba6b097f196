//! Built-in reference data

pub mod vehicles;

pub use vehicles::{get_vehicle_profile, VEHICLE_CATALOG};
