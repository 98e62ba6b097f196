//! Error types for the fare engine

use thiserror::Error;

/// Pricing-related errors
///
/// Every variant is a caller-contract violation; none is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("Unknown vehicle class: {0:?} (expected Business, First or Van)")]
    UnknownVehicleClass(String),

    #[error("Hours must be provided for hourly bookings")]
    HoursRequired,

    #[error("Invalid distance: {0} km")]
    InvalidDistance(f64),

    #[error("Unreadable distance: {0:?} (expected e.g. \"25.3 km\")")]
    UnreadableDistance(String),

    #[error("Invalid pickup time: {0:?} (expected HH:MM)")]
    InvalidPickupTime(String),

    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("CSV loader error: {0}")]
    Csv(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
