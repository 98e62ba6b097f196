//! Output formatting module

use fare_app::app::{BatchReport, Quote, VehicleOption};
use fare_domain::model::{PricingRequest, Tariff};
use fare_domain::service::format_amount;
use fare_types::{OutputFormat, Result};

pub fn output_quote(output_format: OutputFormat, quote: &Quote, symbol: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(quote)?;
        println!("{}", content);
        return Ok(());
    }

    // Table format
    println!("\nFare Quote");
    println!("==========");
    println!("Booking type:    {}", quote.booking_type);
    println!("Vehicle:         {} ({})", quote.vehicle.name, quote.vehicle.description);
    println!(
        "Capacity:        {} passengers, {} bags",
        quote.vehicle.passengers, quote.vehicle.luggage
    );
    println!("Airport:         {}", if quote.is_airport_transfer { "Yes" } else { "No" });

    if let Some(ref b) = quote.breakdown {
        println!("\n--- Fare Breakdown ---");
        println!("Base fare:       {}", format_amount(b.base_fare, symbol));
        println!("Airport fee:     {}", format_amount(b.airport_fee, symbol));
        println!("Distance charge: {}", format_amount(b.distance_charge, symbol));
        println!("Multiplier:      x{}", b.class_multiplier.normalize());
        println!("Subtotal:        {}", format_amount(b.subtotal, symbol));
        if b.is_peak {
            println!("Peak surcharge:  x{}", b.peak_factor.normalize());
        }
        println!("----------------------");
    }

    println!("Total:           {}", format_amount(quote.price.amount(), symbol));

    Ok(())
}

pub fn output_vehicle_options(
    output_format: OutputFormat,
    request: &PricingRequest,
    options: &[VehicleOption],
    symbol: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(options)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nSelect Your Vehicle ({})", request.booking_type());
    println!("{}", "=".repeat(60));
    println!("{:<16} {:>6} {:>6} {:>14}", "Vehicle", "Pax", "Bags", "Price");
    println!("{}", "-".repeat(60));
    for option in options {
        let price = option
            .price
            .map(|p| format_amount(p.amount(), symbol))
            .unwrap_or_else(|| "Price unavailable".to_string());
        println!(
            "{:<16} {:>6} {:>6} {:>14}",
            option.vehicle.name, option.vehicle.passengers, option.vehicle.luggage, price
        );
    }
    if request.is_airport_transfer() {
        println!("\nIncludes airport pickup fee");
    }
    if let Some(reason) = options.iter().find_map(|o| o.unavailable_reason.as_deref()) {
        println!("\n{}", reason);
    }

    Ok(())
}

pub fn output_batch(output_format: OutputFormat, report: &BatchReport, symbol: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBatch Quote Report");
    println!("{}", "=".repeat(70));
    println!(
        "{:<6} {:<14} {:<16} {:<15} {:>14}",
        "Line", "Reference", "Vehicle", "Type", "Price"
    );
    println!("{}", "-".repeat(70));
    for line in &report.lines {
        match (&line.quote, &line.error) {
            (Some(q), _) => println!(
                "{:<6} {:<14} {:<16} {:<15} {:>14}",
                line.line,
                truncate_str(&line.reference, 13),
                q.vehicle.name,
                q.booking_type.to_string(),
                format_amount(q.price.amount(), symbol)
            ),
            (None, error) => println!(
                "{:<6} {:<14} ERROR: {}",
                line.line,
                truncate_str(&line.reference, 13),
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
    println!("{}", "-".repeat(70));
    println!("Priced:          {}", report.priced);
    println!("Failed:          {}", report.failed);
    println!("Total:           {}", format_amount(report.total.amount(), symbol));

    Ok(())
}

pub fn output_tariff(output_format: OutputFormat, tariff: &Tariff) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(tariff)?;
        println!("{}", content);
        return Ok(());
    }

    let content = toml::to_string_pretty(tariff)?;
    println!("{}", content);
    Ok(())
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}
