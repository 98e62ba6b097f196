//! Pricing regression tests
//!
//! Runs booking inputs through the same path the `fare-quote` binary uses:
//! form text -> request -> quote, and trip sheet -> batch report.

use fare_app::app::{batch_quote, parse_distance_text, parse_hours, quote, quote_all_classes};
use fare_app::config::Config;
use fare_app::repository::load_tariff;
use fare_domain::model::{HourlyPricingRequest, PricingRequest, Tariff, TripPricingRequest};
use fare_domain::{calculate_hourly_price, calculate_price, format_price};
use fare_infra::persistence::FileTariffRepository;
use fare_infra::trip_csv::load_trips_from_csv;
use fare_types::{PricingError, VehicleClass};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn trip(distance: &str, class: &str, time: &str, airport: bool) -> PricingRequest {
    PricingRequest::PointToPoint(TripPricingRequest {
        distance_km: parse_distance_text(distance).unwrap(),
        vehicle_class: class.parse().unwrap(),
        is_airport_transfer: airport,
        pickup_time: time.parse().unwrap(),
    })
}

fn total(request: &PricingRequest) -> Decimal {
    quote(request, &Tariff::standard()).unwrap().price.amount()
}

#[test]
fn test_reference_business_trip() {
    let q = quote(&trip("25 km", "business", "10:00", false), &Tariff::standard()).unwrap();
    assert_eq!(q.price.amount(), dec!(99.00));
    assert_eq!(format_price(q.price), "£99.00");

    let breakdown = q.breakdown.unwrap();
    assert_eq!(breakdown.distance_charge, dec!(60));
    assert!(breakdown.is_peak);
}

#[test]
fn test_first_class_multiplier_steps_down_after_breakpoint() {
    // 30 + 49 = 79 at 19.5 km, 30 + 53 = 83 at 21.5 km
    assert_eq!(total(&trip("19.5 km", "first", "14:00", false)), dec!(118.50));
    assert_eq!(total(&trip("21.5 km", "first", "14:00", false)), dec!(107.90));
}

#[test]
fn test_van_multiplier_is_capped() {
    // 1.4 + 0.002 × 500 would be 2.4; the cap holds it at 1.9
    let price = calculate_price(500.0, VehicleClass::Van, false, "15:00").unwrap();
    assert_eq!(price.amount(), dec!(1539.00));
}

#[test]
fn test_peak_window_edges() {
    let at = |time: &str| total(&trip("25 km", "business", time, false));
    assert_eq!(at("05:59"), dec!(90.00));
    assert_eq!(at("06:00"), dec!(99.00));
    assert_eq!(at("12:59"), dec!(99.00));
    assert_eq!(at("13:00"), dec!(90.00));
}

#[test]
fn test_airport_fee_is_scaled_by_multiplier_and_peak() {
    let without = total(&trip("25 km", "first", "08:00", false));
    let with = total(&trip("25 km", "first", "08:00", true));
    assert_eq!(with - without, dec!(14.30));
}

#[test]
fn test_hourly_booking_from_form_text() {
    let hours = parse_hours("4 hours").unwrap();
    let price = calculate_hourly_price(VehicleClass::Business, hours, false).unwrap();
    assert_eq!(price.amount(), dec!(220.00));
    let with_airport = calculate_hourly_price(VehicleClass::Business, hours, true).unwrap();
    assert_eq!(with_airport.amount(), dec!(230.00));

    assert_eq!(parse_hours("0"), Err(PricingError::HoursRequired));
    let missing = PricingRequest::Hourly(HourlyPricingRequest {
        vehicle_class: VehicleClass::Van,
        hours: None,
        is_airport_transfer: false,
    });
    assert_eq!(quote(&missing, &Tariff::standard()), Err(PricingError::HoursRequired));
}

#[test]
fn test_prices_are_idempotent_and_two_decimal() {
    for distance in ["0 km", "3.3 km", "12.345 km", "1,204 km", "10 mi", "850 m"] {
        for class in VehicleClass::ALL {
            let request = trip(distance, class.id(), "07:45", true);
            let first = total(&request);
            assert_eq!(first, total(&request));
            assert!(first.scale() <= 2, "{} {} -> {}", distance, class, first);
            assert!(first > Decimal::ZERO);
        }
    }
}

#[test]
fn test_vehicle_list_prices_every_class() {
    let options = quote_all_classes(&trip("25 km", "van", "10:00", false), &Tariff::standard());
    let names: Vec<_> = options.iter().map(|o| o.vehicle.name.as_str()).collect();
    assert_eq!(names, vec!["Business Class", "First Class", "Van/SUV"]);
    assert!(options.iter().all(|o| o.price.is_some()));
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert_eq!(
        "Limo".parse::<VehicleClass>(),
        Err(PricingError::UnknownVehicleClass("Limo".to_string()))
    );
    assert!(parse_distance_text("far away").is_err());
    assert!("25:00".parse::<fare_domain::model::PickupTime>().is_err());

    let negative = PricingRequest::PointToPoint(TripPricingRequest {
        distance_km: -1.0,
        vehicle_class: VehicleClass::Business,
        is_airport_transfer: false,
        pickup_time: "10:00".parse().unwrap(),
    });
    assert!(matches!(
        quote(&negative, &Tariff::standard()),
        Err(PricingError::InvalidDistance(_))
    ));
}

#[test]
fn test_batch_trip_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trips.csv");
    std::fs::write(
        &path,
        "reference,distance_km,vehicle_class,pickup_time,airport,hours\n\
         BK-1,25,business,10:00,no,\n\
         BK-2,5,first,14:00,yes,\n\
         BK-3,0,van,09:00,no,4\n\
         BK-4,10,limo,10:00,no,\n",
    )
    .unwrap();

    let rows = load_trips_from_csv(&path).unwrap();
    assert_eq!(rows.len(), 4);

    let report = batch_quote(&rows, &Tariff::standard());
    assert_eq!(report.priced, 3);
    assert_eq!(report.failed, 1);
    // 99.00 + 82.50 + 280.00
    assert_eq!(report.total.amount(), dec!(461.50));
    assert_eq!(report.lines[3].reference, "BK-4");
    assert!(report.lines[3].error.is_some());
}

#[test]
fn test_custom_tariff_file_overrides_standard() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tariff.toml");

    let mut tariff = Tariff::standard();
    tariff.base_fare = dec!(40);
    FileTariffRepository::new(path.clone()).save(&tariff).unwrap();

    let config = Config {
        tariff_path: Some(path),
        ..Config::default()
    };
    let loaded = load_tariff(&config, None).unwrap();
    let q = quote(&trip("25 km", "business", "14:00", false), &loaded).unwrap();
    assert_eq!(q.price.amount(), dec!(100.00));
}
