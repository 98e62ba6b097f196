//! Infrastructure layer - file-backed adapters for the fare engine

pub mod persistence;
pub mod trip_csv;
