//! Turning booking form values into pricing inputs
//!
//! The booking form hands over strings: the distance-matrix text
//! ("25.3 km"), the place types of each endpoint, and the hire duration.

use fare_types::PricingError;

const METRES_PER_KM: f64 = 1000.0;
const KM_PER_MILE: f64 = 1.609344;

/// Parse distance-matrix text into kilometres
///
/// Accepts "25.3 km", "1,204 km", "850 m", "12 mi" and bare numbers
/// (taken as kilometres).
pub fn parse_distance_text(text: &str) -> Result<f64, PricingError> {
    let unreadable = || PricingError::UnreadableDistance(text.to_string());

    let normalized = text.trim().to_lowercase().replace(',', "");
    let split = normalized
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(normalized.len());
    let (number, unit) = normalized.split_at(split);

    let value: f64 = number.parse().map_err(|_| unreadable())?;
    let km = match unit.trim() {
        "" | "km" | "kms" | "kilometres" | "kilometers" => value,
        "m" | "metres" | "meters" => value / METRES_PER_KM,
        "mi" | "mile" | "miles" => value * KM_PER_MILE,
        _ => return Err(unreadable()),
    };
    Ok(km)
}

/// Whether a place's types mark it as an airport
pub fn is_airport_place<S: AsRef<str>>(place_types: &[S]) -> bool {
    place_types.iter().any(|t| t.as_ref().eq_ignore_ascii_case("airport"))
}

/// A trip is an airport transfer when either endpoint is an airport
pub fn is_airport_transfer<S: AsRef<str>>(pickup_types: &[S], dropoff_types: &[S]) -> bool {
    is_airport_place(pickup_types) || is_airport_place(dropoff_types)
}

/// Parse the hire duration field ("4", "4 hours", "1 hour")
pub fn parse_hours(text: &str) -> Result<u32, PricingError> {
    let trimmed = text.trim().to_lowercase();
    let number = trimmed
        .strip_suffix("hours")
        .or_else(|| trimmed.strip_suffix("hour"))
        .or_else(|| trimmed.strip_suffix('h'))
        .unwrap_or(trimmed.as_str())
        .trim();

    match number.parse::<u32>() {
        Ok(hours) if hours > 0 => Ok(hours),
        _ => Err(PricingError::HoursRequired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_kilometre_text() {
        assert!(close(parse_distance_text("25.3 km").unwrap(), 25.3));
        assert!(close(parse_distance_text("25.3km").unwrap(), 25.3));
        assert!(close(parse_distance_text(" 40 KM ").unwrap(), 40.0));
        assert!(close(parse_distance_text("12").unwrap(), 12.0));
    }

    #[test]
    fn test_thousands_separator() {
        assert!(close(parse_distance_text("1,204 km").unwrap(), 1204.0));
    }

    #[test]
    fn test_metres_and_miles() {
        assert!(close(parse_distance_text("850 m").unwrap(), 0.85));
        assert!(close(parse_distance_text("10 mi").unwrap(), 16.09344));
    }

    #[test]
    fn test_unreadable_distance() {
        for text in ["", "km", "far", "12 furlongs", "-3 km"] {
            assert_eq!(
                parse_distance_text(text),
                Err(PricingError::UnreadableDistance(text.to_string())),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_airport_detection() {
        assert!(is_airport_place(&["airport", "point_of_interest"]));
        assert!(!is_airport_place(&["lodging"]));
        assert!(is_airport_transfer(&["lodging"], &["airport"]));
        assert!(!is_airport_transfer::<&str>(&[], &[]));
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("4"), Ok(4));
        assert_eq!(parse_hours("4 hours"), Ok(4));
        assert_eq!(parse_hours("1 hour"), Ok(1));
        assert_eq!(parse_hours("3h"), Ok(3));
    }

    #[test]
    fn test_parse_hours_rejects_missing_or_zero() {
        assert_eq!(parse_hours(""), Err(PricingError::HoursRequired));
        assert_eq!(parse_hours("0"), Err(PricingError::HoursRequired));
        assert_eq!(parse_hours("all day"), Err(PricingError::HoursRequired));
    }
}
