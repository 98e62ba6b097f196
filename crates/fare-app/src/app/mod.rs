//! Quoting use cases

pub mod quote_service;
pub mod trip_input;

pub use quote_service::{
    batch_quote, price_request, quote, quote_all_classes, BatchLine, BatchReport, Quote, VehicleOption,
};
pub use trip_input::{is_airport_place, is_airport_transfer, parse_distance_text, parse_hours};
