//! Trip requests handed to the pricing services

use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use fare_types::{BookingType, PricingError, VehicleClass};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Local pickup time, 24-hour "HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickupTime(NaiveTime);

impl PickupTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(PickupTime)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl FromStr for PickupTime {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(PickupTime)
            .map_err(|_| PricingError::InvalidPickupTime(s.to_string()))
    }
}

impl std::fmt::Display for PickupTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for PickupTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PickupTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Point-to-point (distance-based) pricing input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPricingRequest {
    /// Road distance from the distance-matrix lookup
    pub distance_km: f64,
    pub vehicle_class: VehicleClass,
    /// Either endpoint is an airport
    pub is_airport_transfer: bool,
    pub pickup_time: PickupTime,
}

impl TripPricingRequest {
    /// Distance as an exact decimal; negative and non-finite distances are rejected
    pub fn distance(&self) -> Result<Decimal, PricingError> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(PricingError::InvalidDistance(self.distance_km));
        }
        // The shortest round-trip rendering keeps 20.01 as 20.01 rather than
        // its binary expansion.
        Decimal::from_str(&self.distance_km.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(self.distance_km))
            .ok_or(PricingError::InvalidDistance(self.distance_km))
    }
}

/// Hourly hire pricing input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPricingRequest {
    pub vehicle_class: VehicleClass,
    /// Whole hours booked; must be present and non-zero
    pub hours: Option<u32>,
    pub is_airport_transfer: bool,
}

impl HourlyPricingRequest {
    pub fn hours(&self) -> Result<u32, PricingError> {
        match self.hours {
            Some(hours) if hours > 0 => Ok(hours),
            _ => Err(PricingError::HoursRequired),
        }
    }
}

/// A booking's pricing input, tagged by the pricing model it uses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PricingRequest {
    PointToPoint(TripPricingRequest),
    Hourly(HourlyPricingRequest),
}

impl PricingRequest {
    pub fn booking_type(&self) -> BookingType {
        match self {
            PricingRequest::PointToPoint(_) => BookingType::PointToPoint,
            PricingRequest::Hourly(_) => BookingType::Hourly,
        }
    }

    pub fn vehicle_class(&self) -> VehicleClass {
        match self {
            PricingRequest::PointToPoint(trip) => trip.vehicle_class,
            PricingRequest::Hourly(hourly) => hourly.vehicle_class,
        }
    }

    pub fn is_airport_transfer(&self) -> bool {
        match self {
            PricingRequest::PointToPoint(trip) => trip.is_airport_transfer,
            PricingRequest::Hourly(hourly) => hourly.is_airport_transfer,
        }
    }

    /// The same booking in another vehicle class
    pub fn with_vehicle_class(&self, class: VehicleClass) -> Self {
        match self {
            PricingRequest::PointToPoint(trip) => PricingRequest::PointToPoint(TripPricingRequest {
                vehicle_class: class,
                ..trip.clone()
            }),
            PricingRequest::Hourly(hourly) => PricingRequest::Hourly(HourlyPricingRequest {
                vehicle_class: class,
                ..hourly.clone()
            }),
        }
    }
}
