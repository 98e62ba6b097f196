//! Domain layer for the chauffeur fare engine
//!
//! Everything in here is pure: no I/O, no shared state. Pricing calls can be
//! made from any thread with identical inputs always giving identical prices.

pub mod model;
pub mod repository;
pub mod service;

pub use model::*;
pub use repository::TariffRepository;
pub use service::{calculate_hourly_price, calculate_price, format_price};
