//! Quote service - selects the pricing model and assembles quotes

use fare_domain::model::{FareBreakdown, Price, PricingRequest, Tariff, VehicleProfile};
use fare_domain::service::{calculate_breakdown, price_hourly, price_trip};
use fare_infra::trip_csv::TripSheetRow;
use fare_types::{BookingType, PricingError};
use serde::{Deserialize, Serialize};

use crate::constants::get_vehicle_profile;

/// A priced booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub booking_type: BookingType,
    pub vehicle: VehicleProfile,
    pub is_airport_transfer: bool,
    pub price: Price,
    /// Present for point-to-point bookings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<FareBreakdown>,
}

/// One entry of the vehicle selection list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleOption {
    pub vehicle: VehicleProfile,
    /// `None` when the booking cannot be priced ("Price unavailable")
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
}

/// Outcome of one trip sheet row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchLine {
    pub line: usize,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch quoting results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub lines: Vec<BatchLine>,
    pub priced: usize,
    pub failed: usize,
    /// Sum of all priced lines
    pub total: Price,
}

/// Price a booking with whichever model its booking type selects
pub fn price_request(request: &PricingRequest, tariff: &Tariff) -> Result<Price, PricingError> {
    match request {
        PricingRequest::PointToPoint(trip) => price_trip(trip, tariff),
        PricingRequest::Hourly(hourly) => price_hourly(hourly, tariff),
    }
}

/// Price a booking and attach its vehicle and breakdown
pub fn quote(request: &PricingRequest, tariff: &Tariff) -> Result<Quote, PricingError> {
    let (price, breakdown) = match request {
        PricingRequest::PointToPoint(trip) => {
            let breakdown = calculate_breakdown(trip, tariff)?;
            (breakdown.total, Some(breakdown))
        }
        PricingRequest::Hourly(hourly) => (price_hourly(hourly, tariff)?, None),
    };

    Ok(Quote {
        booking_type: request.booking_type(),
        vehicle: get_vehicle_profile(request.vehicle_class()).clone(),
        is_airport_transfer: request.is_airport_transfer(),
        price,
        breakdown,
    })
}

/// Price the same booking in every vehicle class, in catalog order
///
/// The class on `request` is ignored. A class that cannot be priced is listed
/// without a price rather than dropped.
pub fn quote_all_classes(request: &PricingRequest, tariff: &Tariff) -> Vec<VehicleOption> {
    fare_types::VehicleClass::ALL
        .into_iter()
        .map(|class| {
            let vehicle = get_vehicle_profile(class).clone();
            match price_request(&request.with_vehicle_class(class), tariff) {
                Ok(price) => VehicleOption {
                    vehicle,
                    price: Some(price),
                    unavailable_reason: None,
                },
                Err(e) => VehicleOption {
                    vehicle,
                    price: None,
                    unavailable_reason: Some(e.to_string()),
                },
            }
        })
        .collect()
}

/// Quote every row of a trip sheet
pub fn batch_quote(rows: &[TripSheetRow], tariff: &Tariff) -> BatchReport {
    let lines: Vec<BatchLine> = rows
        .iter()
        .map(|row| {
            let result = row
                .request
                .clone()
                .and_then(|request| quote(&request, tariff));
            match result {
                Ok(q) => BatchLine {
                    line: row.line,
                    reference: row.reference.clone(),
                    quote: Some(q),
                    error: None,
                },
                Err(e) => {
                    log::warn!("Line {} ({}): {}", row.line, row.reference, e);
                    BatchLine {
                        line: row.line,
                        reference: row.reference.clone(),
                        quote: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    let priced: Vec<Price> = lines.iter().filter_map(|l| l.quote.as_ref().map(|q| q.price)).collect();
    let failed = lines.len() - priced.len();

    BatchReport {
        priced: priced.len(),
        failed,
        total: priced.iter().copied().sum(),
        lines,
    }
}
