//! CSV loader for trip sheets (batch quoting)
//!
//! Expected columns (header optional):
//! reference, distance_km, vehicle_class, pickup_time, airport, [hours]
//!
//! A non-empty `hours` column makes the row an hourly booking.

use std::path::Path;

use fare_domain::model::{HourlyPricingRequest, PickupTime, PricingRequest, TripPricingRequest};
use fare_types::{Error, PricingError, Result, VehicleClass};

/// One row of a trip sheet
///
/// Rows whose pricing fields are invalid (unknown class, bad time, negative
/// distance) are kept with their error so the batch report can show them.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSheetRow {
    /// 1-based line number in the file
    pub line: usize,
    pub reference: String,
    pub request: std::result::Result<PricingRequest, PricingError>,
}

/// Load a trip sheet
///
/// Lines that are structurally unusable (too few columns, non-numeric
/// distance) are skipped with a warning.
pub fn load_trips_from_csv(path: &Path) -> Result<Vec<TripSheetRow>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)
        .map_err(|e| Error::Csv(e.to_string()))?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::Csv(e.to_string()))?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(index + 1);
        let fields: Vec<&str> = record.iter().collect();

        if index == 0 && is_header(&fields) {
            continue;
        }
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        match parse_row(&fields, line) {
            Some(row) => rows.push(row),
            None => log::warn!("Skipping unreadable trip sheet line {}: {}", line, fields.join(",")),
        }
    }

    log::info!("Loaded {} trips from {}", rows.len(), path.display());
    Ok(rows)
}

fn is_header(fields: &[&str]) -> bool {
    fields.iter().any(|h| {
        let h = h.to_lowercase();
        h.contains("reference") || h.contains("distance") || h.contains("class") || h.contains("pickup")
    })
}

fn parse_row(fields: &[&str], line: usize) -> Option<TripSheetRow> {
    if fields.len() < 4 {
        return None;
    }
    let reference = fields.first()?.to_string();
    let distance_km: f64 = fields.get(1)?.parse().ok()?;
    let class_field = *fields.get(2)?;
    let time_field = *fields.get(3)?;
    let is_airport_transfer = fields.get(4).map(|s| parse_flag(s)).unwrap_or(Some(false))?;
    let hours_field = fields.get(5).copied().filter(|s| !s.is_empty());

    let request = build_request(distance_km, class_field, time_field, is_airport_transfer, hours_field)?;

    Some(TripSheetRow {
        line,
        reference,
        request,
    })
}

/// Outer `None` means the row is unreadable; the inner result carries pricing errors.
fn build_request(
    distance_km: f64,
    class_field: &str,
    time_field: &str,
    is_airport_transfer: bool,
    hours_field: Option<&str>,
) -> Option<std::result::Result<PricingRequest, PricingError>> {
    let vehicle_class = match class_field.parse::<VehicleClass>() {
        Ok(class) => class,
        Err(e) => return Some(Err(e)),
    };

    if let Some(hours) = hours_field {
        let hours: u32 = hours.parse().ok()?;
        return Some(Ok(PricingRequest::Hourly(HourlyPricingRequest {
            vehicle_class,
            hours: Some(hours),
            is_airport_transfer,
        })));
    }

    let pickup_time = match time_field.parse::<PickupTime>() {
        Ok(time) => time,
        Err(e) => return Some(Err(e)),
    };
    Some(Ok(PricingRequest::PointToPoint(TripPricingRequest {
        distance_km,
        vehicle_class,
        is_airport_transfer,
        pickup_time,
    })))
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Some(false),
        "true" | "yes" | "y" | "1" => Some(true),
        _ => None,
    }
}
