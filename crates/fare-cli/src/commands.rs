//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_batch, output_quote, output_tariff, output_vehicle_options};
use fare_app::app::{batch_quote, parse_distance_text, parse_hours, quote, quote_all_classes};
use fare_app::config::Config;
use fare_app::repository::load_tariff;
use fare_domain::model::{HourlyPricingRequest, PickupTime, PricingRequest, Tariff, TripPricingRequest};
use fare_infra::persistence::FileTariffRepository;
use fare_infra::trip_csv::load_trips_from_csv;
use fare_types::{OutputFormat, PricingError, Result, VehicleClass};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Quote {
            distance,
            class,
            time,
            airport,
        } => {
            let tariff = load_tariff(&config, cli.tariff.clone())?;
            let request = point_to_point_request(distance, class, time, *airport)?;
            cmd_quote(&config, &tariff, &request, output_format)
        }

        Commands::Hourly { class, hours, airport } => {
            let tariff = load_tariff(&config, cli.tariff.clone())?;
            let request = hourly_request(class, Some(hours), *airport)?;
            cmd_quote(&config, &tariff, &request, output_format)
        }

        Commands::Vehicles {
            distance,
            time,
            hours,
            airport,
        } => {
            let tariff = load_tariff(&config, cli.tariff.clone())?;
            // The class is replaced per row; Business is only a placeholder.
            let placeholder = VehicleClass::Business.id();
            let request = match (hours, distance, time) {
                (Some(hours), _, _) => hourly_request(placeholder, Some(hours), *airport)?,
                (None, Some(distance), Some(time)) => {
                    point_to_point_request(distance, placeholder, time, *airport)?
                }
                _ => return Err(PricingError::HoursRequired.into()),
            };
            cmd_vehicles(&config, &tariff, &request, output_format)
        }

        Commands::Batch { file } => {
            let tariff = load_tariff(&config, cli.tariff.clone())?;
            cmd_batch(&config, &tariff, file.clone(), output_format)
        }

        Commands::Tariff { export } => {
            let tariff = load_tariff(&config, cli.tariff.clone())?;
            cmd_tariff(&tariff, export.clone(), output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_tariff,
            clear_tariff,
            set_currency,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            set_tariff.clone(),
            *clear_tariff,
            set_currency.clone(),
            *reset,
        ),
    }
}

fn point_to_point_request(distance: &str, class: &str, time: &str, airport: bool) -> Result<PricingRequest> {
    let vehicle_class: VehicleClass = class.parse()?;
    let distance_km = parse_distance_text(distance)?;
    let pickup_time: PickupTime = time.parse()?;
    Ok(PricingRequest::PointToPoint(TripPricingRequest {
        distance_km,
        vehicle_class,
        is_airport_transfer: airport,
        pickup_time,
    }))
}

fn hourly_request(class: &str, hours: Option<&String>, airport: bool) -> Result<PricingRequest> {
    let vehicle_class: VehicleClass = class.parse()?;
    let hours = hours.map(|h| parse_hours(h)).transpose()?;
    Ok(PricingRequest::Hourly(HourlyPricingRequest {
        vehicle_class,
        hours,
        is_airport_transfer: airport,
    }))
}

fn cmd_quote(config: &Config, tariff: &Tariff, request: &PricingRequest, output_format: OutputFormat) -> Result<()> {
    let quote = quote(request, tariff)?;
    output_quote(output_format, &quote, &config.currency_symbol)
}

fn cmd_vehicles(
    config: &Config,
    tariff: &Tariff,
    request: &PricingRequest,
    output_format: OutputFormat,
) -> Result<()> {
    let options = quote_all_classes(request, tariff);
    output_vehicle_options(output_format, request, &options, &config.currency_symbol)
}

fn cmd_batch(config: &Config, tariff: &Tariff, file: PathBuf, output_format: OutputFormat) -> Result<()> {
    let rows = load_trips_from_csv(&file)?;
    if rows.is_empty() {
        log::warn!("No trips found in {}", file.display());
    }

    let report = batch_quote(&rows, tariff);
    output_batch(output_format, &report, &config.currency_symbol)
}

fn cmd_tariff(tariff: &Tariff, export: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    if let Some(path) = export {
        FileTariffRepository::new(path.clone()).save(tariff)?;
        println!("Tariff written to {}", path.display());
        return Ok(());
    }

    output_tariff(output_format, tariff)
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_tariff: Option<PathBuf>,
    clear_tariff: bool,
    set_currency: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_tariff {
        // Refuse to point the config at a tariff that cannot be loaded
        load_tariff(&config, Some(path.clone()))?;
        config.tariff_path = Some(path);
        modified = true;
    }

    if clear_tariff {
        config.tariff_path = None;
        modified = true;
    }

    if let Some(symbol) = set_currency {
        config.currency_symbol = symbol;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
