//! CLI definition using clap

use clap::{Parser, Subcommand};
use fare_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fare-quote")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Fare quotes for chauffeur bookings")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Tariff TOML file. Uses config value, then the standard tariff, if not specified.
    #[arg(long, global = true)]
    pub tariff: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a point-to-point transfer
    Quote {
        /// Road distance, e.g. "25.3 km" or 25.3
        #[arg(long, short = 'd')]
        distance: String,

        /// Vehicle class (Business, First, Van)
        #[arg(long, short = 'c')]
        class: String,

        /// Pickup time, 24-hour HH:MM
        #[arg(long, short = 't')]
        time: String,

        /// Either endpoint is an airport
        #[arg(long)]
        airport: bool,
    },

    /// Price an hourly hire
    Hourly {
        /// Vehicle class (Business, First, Van)
        #[arg(long, short = 'c')]
        class: String,

        /// Hours booked, e.g. 4 or "4 hours"
        #[arg(long, short = 'H')]
        hours: String,

        /// Pickup or drop-off at an airport
        #[arg(long)]
        airport: bool,
    },

    /// Price a booking in every vehicle class
    Vehicles {
        /// Road distance (point-to-point bookings)
        #[arg(long, short = 'd', required_unless_present = "hours")]
        distance: Option<String>,

        /// Pickup time, 24-hour HH:MM (point-to-point bookings)
        #[arg(long, short = 't', required_unless_present = "hours")]
        time: Option<String>,

        /// Hours booked; makes this an hourly booking
        #[arg(long, short = 'H')]
        hours: Option<String>,

        /// Either endpoint is an airport
        #[arg(long)]
        airport: bool,
    },

    /// Price every trip in a CSV trip sheet
    Batch {
        /// CSV file: reference, distance_km, vehicle_class, pickup_time, airport, [hours]
        file: PathBuf,
    },

    /// Show the active tariff, or write it out as a template
    Tariff {
        /// Write the active tariff to this TOML file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Use a tariff TOML file by default
        #[arg(long)]
        set_tariff: Option<PathBuf>,

        /// Go back to the standard tariff
        #[arg(long)]
        clear_tariff: bool,

        /// Set the currency symbol used for display
        #[arg(long)]
        set_currency: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
