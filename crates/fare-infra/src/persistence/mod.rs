//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_tariff_repo;

pub use file_tariff_repo::FileTariffRepository;
